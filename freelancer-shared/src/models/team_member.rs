//! Team member model and store operations
//!
//! Team members are collaborators a freelancer can assign tasks to. Removing
//! a member leaves task assignments pointing at the old id.

use super::trimmed;
use crate::ids::{TeamMemberId, UserId};
use crate::store::{DataStore, StoreResult};
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Availability of a team member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamMemberStatus {
    #[default]
    Active,
    Inactive,
}

impl TeamMemberStatus {
    pub const ALL: [TeamMemberStatus; 2] = [TeamMemberStatus::Active, TeamMemberStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamMemberStatus::Active => "active",
            TeamMemberStatus::Inactive => "inactive",
        }
    }
}

/// Team member record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: TeamMemberId,

    pub name: String,

    pub email: String,

    /// Job title, free text ("Designer", "Copywriter", ...)
    pub role: String,

    pub status: TeamMemberStatus,

    #[serde(with = "crate::timestamp::millis")]
    pub created_at: Timestamp,

    #[serde(with = "crate::timestamp::millis")]
    pub updated_at: Timestamp,

    pub user_id: UserId,
}

impl_record!(TeamMember, TeamMemberId, team_members, "team_member");
impl_owned!(TeamMember);

/// Input for adding a team member
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateTeamMember {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub status: TeamMemberStatus,

    pub user_id: UserId,
}

/// Input for updating a team member
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTeamMember {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub role: Option<String>,

    pub status: Option<TeamMemberStatus>,
}

impl UpdateTeamMember {
    fn apply_to(self, member: &mut TeamMember) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(email) = self.email {
            member.email = email;
        }
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(status) = self.status {
            member.status = status;
        }
    }
}

impl TeamMember {
    /// Adds a team member
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the document cannot be saved.
    pub fn create(store: &DataStore, mut data: CreateTeamMember) -> StoreResult<Self> {
        data.name = trimmed(data.name);
        data.validate()?;

        super::insert(store, |id, now| TeamMember {
            id,
            name: data.name,
            email: data.email,
            role: data.role,
            status: data.status,
            created_at: now,
            updated_at: now,
            user_id: data.user_id,
        })
    }

    pub fn find_by_id(store: &DataStore, id: &TeamMemberId) -> StoreResult<Option<Self>> {
        super::find(store, id)
    }

    pub fn list_by_user(store: &DataStore, user_id: &UserId) -> StoreResult<Vec<Self>> {
        super::list_owned(store, user_id)
    }

    /// Updates a team member, `None` if no member has `id`
    pub fn update(
        store: &DataStore,
        id: &TeamMemberId,
        mut data: UpdateTeamMember,
    ) -> StoreResult<Option<Self>> {
        data.name = data.name.map(trimmed);
        data.validate()?;
        super::modify(store, id, |member: &mut TeamMember| data.apply_to(member))
    }

    /// Removes a team member; `false` if none had `id`
    pub fn delete(store: &DataStore, id: &TeamMemberId) -> StoreResult<bool> {
        super::remove::<TeamMember>(store, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    fn designer() -> CreateTeamMember {
        CreateTeamMember {
            name: "Sam Lee".to_string(),
            email: "sam@studio.dev".to_string(),
            role: "Designer".to_string(),
            user_id: UserId::new("u1"),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_and_deactivate() {
        let store = DataStore::in_memory();
        let member = TeamMember::create(&store, designer()).unwrap();
        assert_eq!(member.status, TeamMemberStatus::Active);

        let updated = TeamMember::update(
            &store,
            &member.id,
            UpdateTeamMember {
                status: Some(TeamMemberStatus::Inactive),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();

        assert_eq!(updated.status, TeamMemberStatus::Inactive);
        assert_eq!(updated.role, "Designer");
    }

    #[test]
    fn test_create_rejects_bad_email() {
        let store = DataStore::in_memory();
        let result = TeamMember::create(
            &store,
            CreateTeamMember {
                email: "sam".to_string(),
                ..designer()
            },
        );
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let store = DataStore::in_memory();
        let member = TeamMember::create(&store, designer()).unwrap();

        let created = TeamMember::create(
            &store,
            CreateTeamMember {
                name: "  ".to_string(),
                ..designer()
            },
        );
        assert!(matches!(created, Err(StoreError::Validation(_))));

        let renamed = TeamMember::update(
            &store,
            &member.id,
            UpdateTeamMember {
                name: Some("\t".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(renamed, Err(StoreError::Validation(_))));
        assert_eq!(TeamMember::find_by_id(&store, &member.id).unwrap(), Some(member));
    }

    #[test]
    fn test_delete_missing_member() {
        let store = DataStore::in_memory();
        TeamMember::create(&store, designer()).unwrap();

        assert!(!TeamMember::delete(&store, &TeamMemberId::new("ghost")).unwrap());
        assert_eq!(store.load().team_members.len(), 1);
    }

    #[test]
    fn test_serialized_collection_name() {
        let store = DataStore::in_memory();
        TeamMember::create(&store, designer()).unwrap();

        let json = serde_json::to_value(store.load()).unwrap();
        assert_eq!(json["teamMembers"].as_array().map(Vec::len), Some(1));
    }
}
