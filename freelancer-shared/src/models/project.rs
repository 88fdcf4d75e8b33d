//! Project model and store operations
//!
//! A project is a piece of work, usually for a client, with an optional
//! schedule and budget and a completion percentage.
//!
//! # Status
//!
//! ```text
//! planning → active → completed
//!              ⇅    → cancelled
//!           on-hold
//! ```
//!
//! The arrows are the usual flow; the store does not enforce them.

use super::{check_amount, non_blank, patch_date, patch_text, patch_value, trimmed};
use crate::ids::{ClientId, ProjectId, UserId};
use crate::store::{DataStore, StoreResult};
use crate::timestamp::{self, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Project lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Scoped but not started
    #[default]
    Planning,

    /// In progress
    Active,

    /// Delivered
    Completed,

    /// Abandoned
    Cancelled,

    /// Paused, written by the projects page
    #[serde(rename = "on-hold")]
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Planning,
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
            ProjectStatus::OnHold => "on-hold",
        }
    }

    /// Checks if the project has finished one way or another
    pub fn is_closed(&self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Cancelled)
    }
}

/// Project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub status: ProjectStatus,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::millis_option"
    )]
    pub start_date: Option<Timestamp>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::millis_option"
    )]
    pub end_date: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Completion percentage, 0 to 100
    #[serde(default)]
    pub progress: u8,

    #[serde(with = "crate::timestamp::millis")]
    pub created_at: Timestamp,

    #[serde(with = "crate::timestamp::millis")]
    pub updated_at: Timestamp,

    /// Owner
    pub user_id: UserId,

    /// Client the project is for (weak reference)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
}

impl_record!(Project, ProjectId, projects, "project");
impl_owned!(Project);

/// Input for creating a new project
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    pub description: Option<String>,

    #[serde(default)]
    pub status: ProjectStatus,

    pub start_date: Option<Timestamp>,

    pub end_date: Option<Timestamp>,

    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub budget: Option<f64>,

    #[validate(range(max = 100, message = "Progress must be between 0 and 100"))]
    #[serde(default)]
    pub progress: u8,

    pub user_id: UserId,

    pub client_id: Option<ClientId>,
}

/// Input for updating a project
///
/// All fields are optional. Only non-None fields will be updated; use
/// `Some(None)` to clear an optional field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    pub description: Option<Option<String>>,

    pub status: Option<ProjectStatus>,

    pub start_date: Option<Option<Timestamp>>,

    pub end_date: Option<Option<Timestamp>>,

    pub budget: Option<Option<f64>>,

    #[validate(range(max = 100, message = "Progress must be between 0 and 100"))]
    pub progress: Option<u8>,

    pub client_id: Option<Option<ClientId>>,
}

impl UpdateProject {
    fn apply_to(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        patch_text(&mut project.description, self.description);
        if let Some(status) = self.status {
            project.status = status;
        }
        patch_date(&mut project.start_date, self.start_date);
        patch_date(&mut project.end_date, self.end_date);
        patch_value(&mut project.budget, self.budget);
        if let Some(progress) = self.progress {
            project.progress = progress;
        }
        patch_value(&mut project.client_id, self.client_id);
    }
}

impl Project {
    /// Creates a new project
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (empty name, negative budget,
    /// progress above 100) or the document cannot be saved.
    pub fn create(store: &DataStore, mut data: CreateProject) -> StoreResult<Self> {
        data.name = trimmed(data.name);
        data.validate()?;
        check_amount("budget", data.budget.map(Some))?;

        super::insert(store, |id, now| Project {
            id,
            name: data.name,
            description: non_blank(data.description),
            status: data.status,
            start_date: data.start_date.map(timestamp::truncate),
            end_date: data.end_date.map(timestamp::truncate),
            budget: data.budget,
            progress: data.progress,
            created_at: now,
            updated_at: now,
            user_id: data.user_id,
            client_id: data.client_id,
        })
    }

    /// Finds a project by ID
    pub fn find_by_id(store: &DataStore, id: &ProjectId) -> StoreResult<Option<Self>> {
        super::find(store, id)
    }

    /// Lists the projects of a user in storage order
    pub fn list_by_user(store: &DataStore, user_id: &UserId) -> StoreResult<Vec<Self>> {
        super::list_owned(store, user_id)
    }

    /// Lists the projects referencing a client
    pub fn list_by_client(store: &DataStore, client_id: &ClientId) -> StoreResult<Vec<Self>> {
        super::list_where(store, |project: &Project| {
            project.client_id.as_ref() == Some(client_id)
        })
    }

    /// Updates a project
    ///
    /// # Returns
    ///
    /// The updated project, or `None` if no project has `id`
    pub fn update(
        store: &DataStore,
        id: &ProjectId,
        mut data: UpdateProject,
    ) -> StoreResult<Option<Self>> {
        data.name = data.name.map(trimmed);
        data.validate()?;
        check_amount("budget", data.budget)?;
        super::modify(store, id, |project: &mut Project| data.apply_to(project))
    }
}
