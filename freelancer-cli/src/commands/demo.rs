//! Demo workspace command

use super::Context;
use crate::error::CliResult;
use freelancer_shared::demo::{load_demo_data, DEMO_PASSWORD};
use std::io::Write;

/// Replaces the stored data with the demo workspace
pub fn load(ctx: &Context, out: &mut dyn Write) -> CliResult<()> {
    let user = load_demo_data(&ctx.store, &ctx.session())?;

    if ctx.json {
        return ctx.write_json(out, &user);
    }

    writeln!(out, "Loaded demo workspace")?;
    writeln!(
        out,
        "Signed in as {} (password: {})",
        user.email, DEMO_PASSWORD
    )?;
    Ok(())
}
