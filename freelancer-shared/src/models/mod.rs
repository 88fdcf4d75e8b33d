//! Entity models for FreelancerPro
//!
//! This module contains all entities and their CRUD operations. Every
//! operation goes through the [`DataStore`]: it reads the whole document,
//! touches one collection, and writes the whole document back.
//!
//! # Models
//!
//! - `user`: Accounts (login key: email)
//! - `client`: Customers of the freelancer
//! - `project`: Work for a client, with progress and budget
//! - `task`: Kanban tasks, optionally tied to a project and a team member
//! - `quote`: Price proposals sent to clients
//! - `contract`: Signed (or pending) agreements with clients
//! - `team_member`: Collaborators of the freelancer
//!
//! References between records (`clientId`, `projectId`, ...) are plain ids;
//! nothing stops them from dangling. See [`crate::refs`] for lookups.
//!
//! Deletion exists for clients and team members only.
//!
//! # Example
//!
//! ```
//! use freelancer_shared::ids::UserId;
//! use freelancer_shared::models::project::{CreateProject, Project, ProjectStatus, UpdateProject};
//! use freelancer_shared::store::DataStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DataStore::in_memory();
//!
//! let project = Project::create(&store, CreateProject {
//!     name: "Site".to_string(),
//!     status: ProjectStatus::Active,
//!     user_id: UserId::new("u1"),
//!     ..Default::default()
//! })?;
//!
//! let done = Project::update(&store, &project.id, UpdateProject {
//!     progress: Some(100),
//!     status: Some(ProjectStatus::Completed),
//!     ..Default::default()
//! })?;
//! assert_eq!(done.map(|p| p.progress), Some(100));
//! # Ok(())
//! # }
//! ```

use crate::ids::{self, UserId};
use crate::store::data_store::Change;
use crate::store::{AppData, DataStore, StoreResult};
use crate::timestamp::{self, Timestamp};
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, info};
use validator::{ValidationError, ValidationErrors};

macro_rules! impl_record {
    ($ty:ty, $id:ty, $field:ident, $kind:literal) => {
        impl $crate::models::Record for $ty {
            type Id = $id;

            const KIND: &'static str = $kind;

            fn id(&self) -> &$id {
                &self.id
            }

            fn updated_at(&self) -> $crate::timestamp::Timestamp {
                self.updated_at
            }

            fn set_updated_at(&mut self, at: $crate::timestamp::Timestamp) {
                self.updated_at = at;
            }

            fn collection(document: &$crate::store::AppData) -> &Vec<Self> {
                &document.$field
            }

            fn collection_mut(document: &mut $crate::store::AppData) -> &mut Vec<Self> {
                &mut document.$field
            }
        }
    };
}

macro_rules! impl_owned {
    ($ty:ty) => {
        impl $crate::models::Owned for $ty {
            fn user_id(&self) -> &$crate::ids::UserId {
                &self.user_id
            }
        }
    };
}

pub mod client;
pub mod contract;
pub mod project;
pub mod quote;
pub mod task;
pub mod team_member;
pub mod user;

/// A record stored in one of the document's collections
pub trait Record: Clone {
    /// Typed identifier of the record
    type Id: Clone + PartialEq + fmt::Debug + fmt::Display + AsRef<str> + From<String>;

    /// Name used in logs
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    fn updated_at(&self) -> Timestamp;

    fn set_updated_at(&mut self, at: Timestamp);

    /// The collection holding this kind of record
    fn collection(document: &AppData) -> &Vec<Self>;

    fn collection_mut(document: &mut AppData) -> &mut Vec<Self>;
}

/// A record scoped to the user who owns it
pub trait Owned: Record {
    fn user_id(&self) -> &UserId;
}

/// Appends a record built with a fresh id and creation time
pub(crate) fn insert<E: Record>(
    store: &DataStore,
    build: impl FnOnce(E::Id, Timestamp) -> E,
) -> StoreResult<E> {
    let record = store.apply(|document| {
        let collection = E::collection_mut(document);
        let id = ids::fresh_id(|candidate| {
            collection.iter().any(|existing| existing.id().as_ref() == candidate)
        });

        let record = build(E::Id::from(id), timestamp::now());
        collection.push(record.clone());
        Change::Commit(record)
    })?;

    info!(kind = E::KIND, id = %record.id(), "Created record");
    Ok(record)
}

/// Finds a record by id
pub(crate) fn find<E: Record>(store: &DataStore, id: &E::Id) -> StoreResult<Option<E>> {
    let document = store.read()?;
    Ok(E::collection(&document)
        .iter()
        .find(|record| record.id() == id)
        .cloned())
}

/// Lists the records owned by `user_id`, in storage order
pub(crate) fn list_owned<E: Owned>(store: &DataStore, user_id: &UserId) -> StoreResult<Vec<E>> {
    list_where(store, |record: &E| record.user_id() == user_id)
}

/// Lists the records matching `predicate`, in storage order
pub(crate) fn list_where<E: Record>(
    store: &DataStore,
    predicate: impl Fn(&E) -> bool,
) -> StoreResult<Vec<E>> {
    let document = store.read()?;
    let records: Vec<E> = E::collection(&document)
        .iter()
        .filter(|record| predicate(record))
        .cloned()
        .collect();

    debug!(kind = E::KIND, count = records.len(), "Listed records");
    Ok(records)
}

/// Edits a record in place and refreshes its `updated_at`
///
/// Returns `None` without writing when no record has `id`.
pub(crate) fn modify<E: Record>(
    store: &DataStore,
    id: &E::Id,
    edit: impl FnOnce(&mut E),
) -> StoreResult<Option<E>> {
    let updated = store.apply(|document| {
        let Some(record) = E::collection_mut(document)
            .iter_mut()
            .find(|record| record.id() == id)
        else {
            return Change::Discard(None);
        };

        edit(record);
        let at = timestamp::next_after(record.updated_at());
        record.set_updated_at(at);
        Change::Commit(Some(record.clone()))
    })?;

    match updated {
        Some(_) => info!(kind = E::KIND, id = %id, "Updated record"),
        None => debug!(kind = E::KIND, id = %id, "Update target not found"),
    }

    Ok(updated)
}

/// Removes a record; `false` when no record has `id`
pub(crate) fn remove<E: Record>(store: &DataStore, id: &E::Id) -> StoreResult<bool> {
    let removed = store.apply(|document| {
        let collection = E::collection_mut(document);
        match collection.iter().position(|record| record.id() == id) {
            Some(index) => {
                collection.remove(index);
                Change::Commit(true)
            }
            None => Change::Discard(false),
        }
    })?;

    if removed {
        info!(kind = E::KIND, id = %id, "Deleted record");
    } else {
        debug!(kind = E::KIND, id = %id, "Delete target not found");
    }

    Ok(removed)
}

/// Normalizes optional free text: blank input means "not set"
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Applies a clearable patch field (`Some(None)` clears)
pub(crate) fn patch_text(target: &mut Option<String>, patch: Option<Option<String>>) {
    if let Some(value) = patch {
        *target = non_blank(value);
    }
}

/// Applies a clearable patch field for non-text values
pub(crate) fn patch_value<T>(target: &mut Option<T>, patch: Option<Option<T>>) {
    if let Some(value) = patch {
        *target = value;
    }
}

/// Applies a clearable date patch, truncated to the persisted precision
pub(crate) fn patch_date(target: &mut Option<Timestamp>, patch: Option<Option<Timestamp>>) {
    patch_value(target, patch.map(|date| date.map(timestamp::truncate)));
}

/// Strips surrounding whitespace from a required name or title
pub(crate) fn trimmed(value: String) -> String {
    value.trim().to_string()
}

/// Rejects negative or non-finite money amounts in a clearable patch field
///
/// JSON has no representation for NaN or infinity, so such a value would be
/// written as `null` and break the next load.
pub(crate) fn check_amount(
    field: &'static str,
    patch: Option<Option<f64>>,
) -> Result<(), ValidationErrors> {
    match patch {
        Some(Some(amount)) if !(amount.is_finite() && amount >= 0.0) => {
            let mut error = ValidationError::new("range");
            error.message = Some(Cow::from("Amount must be a finite, non-negative number"));
            error.add_param(Cow::from("value"), &amount);

            let mut errors = ValidationErrors::new();
            errors.add(field, error);
            Err(errors)
        }
        _ => Ok(()),
    }
}
