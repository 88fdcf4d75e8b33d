//! The aggregate document
//!
//! ```json
//! {
//!   "users": [...],
//!   "clients": [...],
//!   "projects": [...],
//!   "tasks": [...],
//!   "quotes": [...],
//!   "contracts": [...],
//!   "teamMembers": [...]
//! }
//! ```
//!
//! Collections keep insertion order. A missing collection reads as empty so
//! documents written by older versions still load.

use crate::models::{
    client::Client, contract::Contract, project::Project, quote::Quote, task::Task,
    team_member::TeamMember, user::User,
};
use serde::{Deserialize, Serialize};

/// Storage key of the aggregate document
pub const DATA_KEY: &str = "freelancer_app_data";

/// Storage key of the current-user marker
pub const SESSION_KEY: &str = "current_user";

/// All records of one device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppData {
    pub users: Vec<User>,
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub quotes: Vec<Quote>,
    pub contracts: Vec<Contract>,
    pub team_members: Vec<TeamMember>,
}

impl AppData {
    /// True when no collection holds a record
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.clients.is_empty()
            && self.projects.is_empty()
            && self.tasks.is_empty()
            && self.quotes.is_empty()
            && self.contracts.is_empty()
            && self.team_members.is_empty()
    }

    /// Total number of records across all collections
    pub fn record_count(&self) -> usize {
        self.users.len()
            + self.clients.len()
            + self.projects.len()
            + self.tasks.len()
            + self.quotes.len()
            + self.contracts.len()
            + self.team_members.len()
    }
}
