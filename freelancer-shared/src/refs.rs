//! Weak reference resolution
//!
//! Records point at each other by id only, and deletes never cascade, so a
//! reference may dangle. [`Reference`] keeps the three outcomes apart:
//! resolved, dangling, or not set at all.
//!
//! ```
//! use freelancer_shared::ids::ClientId;
//! use freelancer_shared::refs::{resolve_client, UNKNOWN};
//! use freelancer_shared::store::DataStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DataStore::in_memory();
//! let dangling = resolve_client(&store, Some(&ClientId::new("gone")))?;
//!
//! assert!(dangling.is_unresolved());
//! assert_eq!(dangling.label(UNKNOWN), "Unknown");
//! # Ok(())
//! # }
//! ```

use crate::ids::{ClientId, ProjectId, TeamMemberId};
use crate::models::client::Client;
use crate::models::project::Project;
use crate::models::team_member::TeamMember;
use crate::models::Record;
use crate::store::{AppData, DataStore, StoreResult};

/// Fallback label for references that do not resolve
pub const UNKNOWN: &str = "Unknown";

/// Outcome of following a weak reference
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<T: Record> {
    /// The referenced record exists
    Resolved(T),

    /// An id is set but no record has it
    Unresolved(T::Id),

    /// No id is set
    Absent,
}

/// Records with a display name
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for Client {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for Project {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for TeamMember {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl<T: Record> Reference<T> {
    /// Looks `id` up in `records`
    pub fn lookup(records: &[T], id: Option<&T::Id>) -> Self {
        match id {
            None => Reference::Absent,
            Some(id) => records
                .iter()
                .find(|record| record.id() == id)
                .cloned()
                .map_or_else(|| Reference::Unresolved(id.clone()), Reference::Resolved),
        }
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Reference::Resolved(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Reference::Unresolved(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Reference::Resolved(record) => Some(record),
            _ => None,
        }
    }
}

impl<T: Record + Named> Reference<T> {
    /// Display name of the referenced record, or `fallback`
    pub fn label<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.resolved().map_or(fallback, Named::display_name)
    }
}

/// Resolves references against one loaded document
///
/// Use this when rendering many rows so the document is read once.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    document: &'a AppData,
}

impl<'a> Resolver<'a> {
    pub fn new(document: &'a AppData) -> Self {
        Self { document }
    }

    pub fn client(&self, id: Option<&ClientId>) -> Reference<Client> {
        Reference::lookup(&self.document.clients, id)
    }

    pub fn project(&self, id: Option<&ProjectId>) -> Reference<Project> {
        Reference::lookup(&self.document.projects, id)
    }

    pub fn team_member(&self, id: Option<&TeamMemberId>) -> Reference<TeamMember> {
        Reference::lookup(&self.document.team_members, id)
    }
}

pub fn resolve_client(store: &DataStore, id: Option<&ClientId>) -> StoreResult<Reference<Client>> {
    Ok(Resolver::new(&store.read()?).client(id))
}

pub fn resolve_project(
    store: &DataStore,
    id: Option<&ProjectId>,
) -> StoreResult<Reference<Project>> {
    Ok(Resolver::new(&store.read()?).project(id))
}

pub fn resolve_team_member(
    store: &DataStore,
    id: Option<&TeamMemberId>,
) -> StoreResult<Reference<TeamMember>> {
    Ok(Resolver::new(&store.read()?).team_member(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;
    use crate::models::client::CreateClient;
    use crate::models::project::CreateProject;

    fn client(store: &DataStore) -> Client {
        Client::create(
            store,
            CreateClient {
                name: "Acme".to_string(),
                email: "a@acme.com".to_string(),
                user_id: UserId::new("u1"),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_existing_client() {
        let store = DataStore::in_memory();
        let acme = client(&store);

        let reference = resolve_client(&store, Some(&acme.id)).unwrap();
        assert_eq!(reference.label(UNKNOWN), "Acme");
        assert_eq!(reference.into_option(), Some(acme));
    }

    #[test]
    fn test_deleted_client_leaves_dangling_reference() {
        let store = DataStore::in_memory();
        let acme = client(&store);
        let project = Project::create(
            &store,
            CreateProject {
                name: "Site".to_string(),
                user_id: UserId::new("u1"),
                client_id: Some(acme.id.clone()),
                ..Default::default()
            },
        )
        .unwrap();

        Client::delete(&store, &acme.id).unwrap();

        let reference = resolve_client(&store, project.client_id.as_ref()).unwrap();
        assert_eq!(reference, Reference::Unresolved(acme.id));
        assert_eq!(reference.label(UNKNOWN), UNKNOWN);
    }

    #[test]
    fn test_absent_reference() {
        let store = DataStore::in_memory();
        let reference = resolve_team_member(&store, None).unwrap();
        assert_eq!(reference, Reference::Absent);
        assert_eq!(reference.label("Unassigned"), "Unassigned");
    }

    #[test]
    fn test_resolver_over_loaded_document() {
        let store = DataStore::in_memory();
        let acme = client(&store);
        let document = store.load();
        let resolver = Resolver::new(&document);

        assert!(resolver.client(Some(&acme.id)).resolved().is_some());
        assert!(resolver.project(Some(&ProjectId::new("p?"))).is_unresolved());
    }
}
