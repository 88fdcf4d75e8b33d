//! Account commands

use super::Context;
use crate::error::CliResult;
use freelancer_shared::models::user::User;
use std::io::Write;

pub fn register(
    ctx: &Context,
    out: &mut dyn Write,
    email: &str,
    name: &str,
    password: &str,
) -> CliResult<()> {
    let user = ctx.auth().register(email, password, name)?;
    print_user(ctx, out, &user, "Registered and signed in as")
}

pub fn login(ctx: &Context, out: &mut dyn Write, email: &str, password: &str) -> CliResult<()> {
    let user = ctx.auth().login(email, password)?;
    print_user(ctx, out, &user, "Signed in as")
}

pub fn logout(ctx: &Context, out: &mut dyn Write) -> CliResult<()> {
    ctx.auth().logout()?;
    if !ctx.json {
        writeln!(out, "Signed out")?;
    }
    Ok(())
}

pub fn whoami(ctx: &Context, out: &mut dyn Write) -> CliResult<()> {
    let user = ctx.require_user()?;
    print_user(ctx, out, &user, "Signed in as")
}

fn print_user(ctx: &Context, out: &mut dyn Write, user: &User, lead: &str) -> CliResult<()> {
    if ctx.json {
        return ctx.write_json(out, user);
    }

    writeln!(out, "{} {} <{}> ({})", lead, user.name, user.email, user.role.as_str())?;
    Ok(())
}
