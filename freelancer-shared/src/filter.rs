//! Search and status filters for list views
//!
//! A [`ListFilter`] narrows an already listed collection: the query is a
//! case-insensitive substring match over the record's searchable text, the
//! status is an exact match. An empty query or no status matches everything.
//!
//! ```
//! use freelancer_shared::filter::ListFilter;
//! use freelancer_shared::models::client::ClientStatus;
//!
//! let filter = ListFilter::new()
//!     .query("acme")
//!     .status(ClientStatus::Active);
//! assert!(!filter.is_empty());
//! ```

use crate::models::client::{Client, ClientStatus};
use crate::models::contract::{Contract, ContractStatus};
use crate::models::project::{Project, ProjectStatus};
use crate::models::quote::{Quote, QuoteStatus};
use crate::models::task::{Task, TaskPriority, TaskStatus};
use crate::models::team_member::{TeamMember, TeamMemberStatus};
use std::cmp::{Ordering, Reverse};

/// Records that can be searched and filtered by status
pub trait Searchable {
    type Status: Copy + PartialEq;

    /// Text fields the query is matched against
    fn search_fields(&self) -> Vec<&str>;

    fn status(&self) -> Self::Status;
}

impl Searchable for Client {
    type Status = ClientStatus;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.company.as_deref());
        fields
    }

    fn status(&self) -> ClientStatus {
        self.status
    }
}

impl Searchable for Project {
    type Status = ProjectStatus;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }

    fn status(&self) -> ProjectStatus {
        self.status
    }
}

impl Searchable for Task {
    type Status = TaskStatus;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }

    fn status(&self) -> TaskStatus {
        self.status
    }
}

impl Searchable for Quote {
    type Status = QuoteStatus;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }

    fn status(&self) -> QuoteStatus {
        self.status
    }
}

impl Searchable for Contract {
    type Status = ContractStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }

    fn status(&self) -> ContractStatus {
        self.status
    }
}

impl Searchable for TeamMember {
    type Status = TeamMemberStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.as_str()]
    }

    fn status(&self) -> TeamMemberStatus {
        self.status
    }
}

/// Query and status filter
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter<S> {
    pub query: Option<String>,
    pub status: Option<S>,
}

impl<S> Default for ListFilter<S> {
    fn default() -> Self {
        Self {
            query: None,
            status: None,
        }
    }
}

impl<S: Copy + PartialEq> ListFilter<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    /// True when the filter lets everything through
    pub fn is_empty(&self) -> bool {
        self.needle().is_none() && self.status.is_none()
    }

    pub fn matches<E: Searchable<Status = S>>(&self, record: &E) -> bool {
        if let Some(status) = self.status {
            if record.status() != status {
                return false;
            }
        }

        match self.needle() {
            Some(needle) => record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle)),
            None => true,
        }
    }

    /// Keeps matching records, in storage order
    pub fn apply<E: Searchable<Status = S>>(&self, records: Vec<E>) -> Vec<E> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }

    fn needle(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

/// Task list filter: query, status and priority
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub list: ListFilter<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.list.matches(task) && self.priority.map_or(true, |p| task.priority == p)
    }

    /// Keeps matching tasks, ordered for the task list
    ///
    /// Higher priority first; within a priority, earlier due date first when
    /// both tasks have one, otherwise newer tasks first.
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        let mut tasks: Vec<Task> = tasks.into_iter().filter(|t| self.matches(t)).collect();
        tasks.sort_by(task_list_order);
        tasks
    }
}

fn task_list_order(a: &Task, b: &Task) -> Ordering {
    Reverse(a.priority)
        .cmp(&Reverse(b.priority))
        .then_with(|| match (a.due_date, b.due_date) {
            (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
            _ => b.created_at.cmp(&a.created_at),
        })
}
