//! Task model and store operations
//!
//! Tasks are the cards of the Kanban board. A task may belong to a project
//! and may be assigned to a team member; both links are weak references.
//!
//! # Status
//!
//! ```text
//! pending ⇄ in_progress ⇄ completed
//!     ↘        ↓        ↙
//!          cancelled
//! ```
//!
//! Every status can move to every other status. Dropping a card on its own
//! column is not a transition and leaves the task untouched.
//!
//! # Example
//!
//! ```
//! use freelancer_shared::ids::UserId;
//! use freelancer_shared::models::task::{CreateTask, Task, TaskStatus};
//! use freelancer_shared::store::DataStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DataStore::in_memory();
//! let task = Task::create(&store, CreateTask {
//!     title: "Write copy".to_string(),
//!     user_id: UserId::new("u1"),
//!     ..Default::default()
//! })?;
//!
//! let moved = Task::move_to(&store, &task.id, TaskStatus::InProgress)?;
//! assert_eq!(moved.map(|t| t.status), Some(TaskStatus::InProgress));
//! # Ok(())
//! # }
//! ```

use super::{non_blank, patch_date, patch_text, patch_value, trimmed};
use crate::ids::{ProjectId, TaskId, TeamMemberId, UserId};
use crate::store::{DataStore, StoreResult};
use crate::timestamp::{self, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use validator::Validate;

/// Kanban column of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Pending,

    /// Being worked on
    #[serde(alias = "in-progress")]
    InProgress,

    /// Done
    Completed,

    /// Dropped
    Cancelled,
}

impl TaskStatus {
    /// Board column order
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    /// Checks if the task still needs work
    pub fn is_open(&self) -> bool {
        matches!(self, TaskStatus::Pending | TaskStatus::InProgress)
    }

    /// Checks if moving to `target` is a transition
    ///
    /// Transitions are unconstrained: any status may move to any other.
    /// Moving to the current status is not a transition.
    pub fn can_transition_to(&self, target: TaskStatus) -> bool {
        *self != target
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" | "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            other => Err(format!("'{}' is not a task status", other)),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

/// Task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub status: TaskStatus,

    #[serde(default)]
    pub priority: TaskPriority,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::millis_option"
    )]
    pub due_date: Option<Timestamp>,

    #[serde(with = "crate::timestamp::millis")]
    pub created_at: Timestamp,

    #[serde(with = "crate::timestamp::millis")]
    pub updated_at: Timestamp,

    /// Owner
    pub user_id: UserId,

    /// Project the task belongs to (weak reference)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,

    /// Team member working on the task (weak reference)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<TeamMemberId>,
}

impl_record!(Task, TaskId, tasks, "task");
impl_owned!(Task);

/// Input for creating a new task
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    pub description: Option<String>,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: TaskPriority,

    pub due_date: Option<Timestamp>,

    pub user_id: UserId,

    pub project_id: Option<ProjectId>,

    pub assignee_id: Option<TeamMemberId>,
}

/// Input for updating a task
///
/// All fields are optional. Only non-None fields will be updated; use
/// `Some(None)` to clear an optional field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    pub description: Option<Option<String>>,

    pub status: Option<TaskStatus>,

    pub priority: Option<TaskPriority>,

    pub due_date: Option<Option<Timestamp>>,

    pub project_id: Option<Option<ProjectId>>,

    pub assignee_id: Option<Option<TeamMemberId>>,
}

impl UpdateTask {
    fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        patch_text(&mut task.description, self.description);
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        patch_date(&mut task.due_date, self.due_date);
        patch_value(&mut task.project_id, self.project_id);
        patch_value(&mut task.assignee_id, self.assignee_id);
    }
}

impl Task {
    /// Creates a new task (pending unless stated otherwise)
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty or the document cannot be saved.
    pub fn create(store: &DataStore, mut data: CreateTask) -> StoreResult<Self> {
        data.title = trimmed(data.title);
        data.validate()?;

        super::insert(store, |id, now| Task {
            id,
            title: data.title,
            description: non_blank(data.description),
            status: data.status,
            priority: data.priority,
            due_date: data.due_date.map(timestamp::truncate),
            created_at: now,
            updated_at: now,
            user_id: data.user_id,
            project_id: data.project_id,
            assignee_id: data.assignee_id,
        })
    }

    /// Finds a task by ID
    pub fn find_by_id(store: &DataStore, id: &TaskId) -> StoreResult<Option<Self>> {
        super::find(store, id)
    }

    /// Lists the tasks of a user in storage order
    pub fn list_by_user(store: &DataStore, user_id: &UserId) -> StoreResult<Vec<Self>> {
        super::list_owned(store, user_id)
    }

    /// Lists the tasks of a project in storage order
    pub fn list_by_project(store: &DataStore, project_id: &ProjectId) -> StoreResult<Vec<Self>> {
        super::list_where(store, |task: &Task| {
            task.project_id.as_ref() == Some(project_id)
        })
    }

    /// Updates a task
    ///
    /// # Returns
    ///
    /// The updated task, or `None` if no task has `id`
    pub fn update(store: &DataStore, id: &TaskId, mut data: UpdateTask) -> StoreResult<Option<Self>> {
        data.title = data.title.map(trimmed);
        data.validate()?;
        super::modify(store, id, |task: &mut Task| data.apply_to(task))
    }

    /// Moves a task to another Kanban column
    ///
    /// Dropping a task on the column it is already in returns it unchanged
    /// without writing.
    ///
    /// # Returns
    ///
    /// The task after the move, or `None` if no task has `id`
    pub fn move_to(store: &DataStore, id: &TaskId, status: TaskStatus) -> StoreResult<Option<Self>> {
        let Some(task) = Self::find_by_id(store, id)? else {
            return Ok(None);
        };

        if !task.status.can_transition_to(status) {
            debug!(id = %id, status = %status, "Task already in target column");
            return Ok(Some(task));
        }

        Self::update(
            store,
            id,
            UpdateTask {
                status: Some(status),
                ..Default::default()
            },
        )
    }
}
