//! Dashboard summary command

use super::{short_date, Context};
use crate::error::CliResult;
use freelancer_shared::dashboard::DashboardSummary;
use freelancer_shared::refs::{Resolver, UNKNOWN};
use std::io::Write;

pub fn summary(ctx: &Context, out: &mut dyn Write) -> CliResult<()> {
    let user = ctx.require_user()?;
    let summary = DashboardSummary::for_user(&ctx.store, &user.id)?;

    if ctx.json {
        return ctx.write_json(out, &summary);
    }

    let document = ctx.store.read()?;
    let resolver = Resolver::new(&document);

    writeln!(out, "Dashboard for {}", user.name)?;
    writeln!(
        out,
        "  Projects: {} active / {} total",
        summary.active_projects, summary.total_projects
    )?;
    writeln!(
        out,
        "  Clients:  {} active / {} total",
        summary.active_clients, summary.total_clients
    )?;
    writeln!(
        out,
        "  Tasks:    {} pending / {} total",
        summary.pending_tasks, summary.total_tasks
    )?;
    writeln!(out, "  Revenue:  ${:.2}", summary.total_revenue)?;

    writeln!(out, "\nRecent projects")?;
    if summary.recent_projects.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for project in &summary.recent_projects {
        writeln!(
            out,
            "  {:<30} {:<10} {:>3}%  {}",
            project.name,
            project.status.as_str(),
            project.progress,
            resolver.client(project.client_id.as_ref()).label(UNKNOWN)
        )?;
    }

    writeln!(out, "\nUrgent tasks")?;
    if summary.urgent_tasks.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for task in &summary.urgent_tasks {
        let due = task.due_date.as_ref().map(short_date).unwrap_or_default();
        writeln!(
            out,
            "  {}  {:<30} {:<6} {}",
            due,
            task.title,
            task.priority.as_str(),
            resolver.project(task.project_id.as_ref()).label("-")
        )?;
    }

    Ok(())
}
