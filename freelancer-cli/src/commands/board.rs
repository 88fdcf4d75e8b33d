//! Kanban board commands

use super::{short_date, Context};
use crate::error::{CliError, CliResult};
use freelancer_shared::ids::TaskId;
use freelancer_shared::kanban::KanbanBoard;
use freelancer_shared::models::task::{Task, TaskStatus};
use freelancer_shared::refs::Resolver;
use serde_json::{json, Map, Value};
use std::io::Write;
use tracing::info;

pub fn show(ctx: &Context, out: &mut dyn Write) -> CliResult<()> {
    let user = ctx.require_user()?;
    let board = KanbanBoard::for_user(&ctx.store, &user.id)?;

    if ctx.json {
        let columns: Map<String, Value> = board
            .columns()
            .map(|(status, tasks)| {
                serde_json::to_value(tasks).map(|value| (status.as_str().to_string(), value))
            })
            .collect::<Result<_, _>>()?;
        return ctx.write_json(out, &Value::Object(columns));
    }

    let document = ctx.store.read()?;
    let resolver = Resolver::new(&document);

    for (status, tasks) in board.columns() {
        writeln!(out, "{} ({})", status.as_str(), tasks.len())?;
        for task in tasks {
            let due = task.due_date.as_ref().map(short_date).unwrap_or_default();
            writeln!(
                out,
                "  {:<12} {:<30} {:<6} {:<10} {}",
                task.id.as_str(),
                task.title,
                task.priority.as_str(),
                due,
                resolver.team_member(task.assignee_id.as_ref()).label("unassigned")
            )?;
        }
    }
    Ok(())
}

/// Moves one of the signed-in user's tasks to another column
pub fn move_task(ctx: &Context, out: &mut dyn Write, id: &str, status: TaskStatus) -> CliResult<()> {
    let user = ctx.require_user()?;
    let id = TaskId::new(id);
    let not_found = || CliError::NotFound {
        kind: "task",
        id: id.to_string(),
    };

    let task = Task::find_by_id(&ctx.store, &id)?
        .filter(|task| task.user_id == user.id)
        .ok_or_else(not_found)?;
    let from = task.status;

    let moved = Task::move_to(&ctx.store, &id, status)?.ok_or_else(not_found)?;
    if from != moved.status {
        info!(task_id = %id, from = %from, to = %moved.status, "Moved task");
    }

    if ctx.json {
        return ctx.write_json(out, &json!({ "task": moved, "from": from }));
    }

    writeln!(out, "{}: {} -> {}", moved.title, from, moved.status)?;
    Ok(())
}
