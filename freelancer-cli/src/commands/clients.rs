//! Client listing command

use super::Context;
use crate::error::CliResult;
use freelancer_shared::filter::ListFilter;
use freelancer_shared::models::client::{Client, ClientStatus};
use std::io::Write;

pub fn list(
    ctx: &Context,
    out: &mut dyn Write,
    query: Option<String>,
    status: Option<ClientStatus>,
) -> CliResult<()> {
    let user = ctx.require_user()?;
    let filter = ListFilter { query, status };
    let clients = filter.apply(Client::list_by_user(&ctx.store, &user.id)?);

    if ctx.json {
        return ctx.write_json(out, &clients);
    }

    if clients.is_empty() {
        writeln!(out, "No clients found")?;
        return Ok(());
    }

    for client in &clients {
        writeln!(
            out,
            "{:<20} {:<24} {:<32} {:<9} {}",
            client.id.as_str(),
            client.name,
            client.email,
            client.status.as_str(),
            client.company.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}
