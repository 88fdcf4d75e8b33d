//! Dashboard summary
//!
//! Headline figures for one user, computed from a single load of the
//! document.

use crate::ids::UserId;
use crate::models::client::{Client, ClientStatus};
use crate::models::project::{Project, ProjectStatus};
use crate::models::task::{Task, TaskStatus};
use crate::models::Owned;
use crate::store::{AppData, DataStore, StoreResult};
use serde::Serialize;
use tracing::debug;

/// How many entries the recent-projects and urgent-tasks lists hold
pub const HIGHLIGHT_LIMIT: usize = 5;

/// Business overview of one user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_clients: usize,
    pub active_clients: usize,
    pub total_tasks: usize,
    pub pending_tasks: usize,

    /// Sum of accepted quote amounts
    pub total_revenue: f64,

    /// Most recently updated projects, newest first
    pub recent_projects: Vec<Project>,

    /// Tasks not completed that have a due date, soonest first
    pub urgent_tasks: Vec<Task>,
}

impl DashboardSummary {
    /// Computes the summary of `user_id`
    pub fn for_user(store: &DataStore, user_id: &UserId) -> StoreResult<Self> {
        let document = store.read()?;
        let summary = Self::from_document(&document, user_id);

        debug!(
            user_id = %user_id,
            projects = summary.total_projects,
            tasks = summary.total_tasks,
            "Computed dashboard summary"
        );
        Ok(summary)
    }

    pub fn from_document(document: &AppData, user_id: &UserId) -> Self {
        let projects: Vec<&Project> = owned_by(&document.projects, user_id).collect();
        let clients: Vec<&Client> = owned_by(&document.clients, user_id).collect();
        let tasks: Vec<&Task> = owned_by(&document.tasks, user_id).collect();

        let total_revenue = owned_by(&document.quotes, user_id)
            .filter(|quote| quote.is_accepted())
            .map(|quote| quote.amount)
            .sum();

        let mut recent_projects: Vec<Project> = projects.iter().map(|&p| p.clone()).collect();
        recent_projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recent_projects.truncate(HIGHLIGHT_LIMIT);

        let mut urgent_tasks: Vec<Task> = tasks
            .iter()
            .filter(|task| task.status != TaskStatus::Completed && task.due_date.is_some())
            .map(|&task| task.clone())
            .collect();
        urgent_tasks.sort_by_key(|task| task.due_date);
        urgent_tasks.truncate(HIGHLIGHT_LIMIT);

        Self {
            total_projects: projects.len(),
            active_projects: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Active)
                .count(),
            total_clients: clients.len(),
            active_clients: clients
                .iter()
                .filter(|c| c.status == ClientStatus::Active)
                .count(),
            total_tasks: tasks.len(),
            pending_tasks: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Pending)
                .count(),
            total_revenue,
            recent_projects,
            urgent_tasks,
        }
    }
}

fn owned_by<'a, E: Owned>(records: &'a [E], user_id: &'a UserId) -> impl Iterator<Item = &'a E> {
    records.iter().filter(move |record| record.user_id() == user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ClientId;
    use crate::models::project::{CreateProject, UpdateProject};
    use crate::models::quote::{CreateQuote, Quote, QuoteStatus};
    use crate::models::task::{CreateTask, TaskPriority};
    use crate::timestamp;
    use chrono::Duration;

    fn owner() -> UserId {
        UserId::new("u1")
    }

    fn project(store: &DataStore, name: &str) -> Project {
        Project::create(
            store,
            CreateProject {
                name: name.to_string(),
                status: ProjectStatus::Active,
                user_id: owner(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn quote(store: &DataStore, amount: f64, status: QuoteStatus, user: UserId) {
        Quote::create(
            store,
            CreateQuote {
                title: "Q".to_string(),
                amount,
                status,
                user_id: user,
                client_id: ClientId::new("c1"),
                ..Default::default()
            },
        )
        .unwrap();
    }

    #[test]
    fn test_empty_summary() {
        let summary = DashboardSummary::for_user(&DataStore::in_memory(), &owner()).unwrap();
        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert!(summary.recent_projects.is_empty());
    }

    #[test]
    fn test_revenue_counts_accepted_quotes_of_owner() {
        let store = DataStore::in_memory();
        quote(&store, 1000.0, QuoteStatus::Accepted, owner());
        quote(&store, 250.5, QuoteStatus::Accepted, owner());
        quote(&store, 9000.0, QuoteStatus::Sent, owner());
        quote(&store, 7000.0, QuoteStatus::Accepted, UserId::new("u2"));

        let summary = DashboardSummary::for_user(&store, &owner()).unwrap();
        assert_eq!(summary.total_revenue, 1250.5);
    }

    #[test]
    fn test_recent_projects_newest_first_and_capped() {
        let store = DataStore::in_memory();
        let first = project(&store, "P0");
        for i in 1..7 {
            project(&store, &format!("P{}", i));
        }
        Project::update(
            &store,
            &first.id,
            UpdateProject {
                progress: Some(50),
                ..Default::default()
            },
        )
        .unwrap();

        let summary = DashboardSummary::for_user(&store, &owner()).unwrap();
        assert_eq!(summary.total_projects, 7);
        assert_eq!(summary.active_projects, 7);
        assert_eq!(summary.recent_projects.len(), HIGHLIGHT_LIMIT);
        assert_eq!(summary.recent_projects[0].id, first.id);
        assert!(summary
            .recent_projects
            .windows(2)
            .all(|pair| pair[0].updated_at >= pair[1].updated_at));
    }

    #[test]
    fn test_urgent_tasks() {
        let store = DataStore::in_memory();
        let now = timestamp::now();
        let add = |title: &str, status: TaskStatus, due: Option<i64>| {
            Task::create(
                &store,
                CreateTask {
                    title: title.to_string(),
                    status,
                    priority: TaskPriority::High,
                    due_date: due.map(|d| now + Duration::days(d)),
                    user_id: owner(),
                    ..Default::default()
                },
            )
            .unwrap();
        };
        add("later", TaskStatus::Pending, Some(9));
        add("done", TaskStatus::Completed, Some(1));
        add("no-date", TaskStatus::Pending, None);
        add("soon", TaskStatus::InProgress, Some(2));

        let summary = DashboardSummary::for_user(&store, &owner()).unwrap();
        let titles: Vec<_> = summary.urgent_tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["soon", "later"]);
        assert_eq!(summary.pending_tasks, 2);
        assert_eq!(summary.total_tasks, 4);
    }
}
