//! Client model and store operations
//!
//! Clients are the customers a freelancer works for. Projects, quotes and
//! contracts point at a client through `clientId`.
//!
//! Deleting a client does not touch the records that reference it; those
//! references simply stop resolving.

use super::{non_blank, patch_text, trimmed};
use crate::ids::{ClientId, UserId};
use crate::store::{DataStore, StoreResult};
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Relationship stage of a client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    /// Not yet a paying client
    #[default]
    Prospect,

    /// Currently working together
    Active,

    /// No ongoing work
    Inactive,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 3] = [
        ClientStatus::Prospect,
        ClientStatus::Active,
        ClientStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Prospect => "prospect",
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ClientStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| format!("'{}' is not a client status (prospect|active|inactive)", s))
    }
}

/// Client record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,

    pub name: String,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    pub status: ClientStatus,

    /// Free-form notes about the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(with = "crate::timestamp::millis")]
    pub created_at: Timestamp,

    #[serde(with = "crate::timestamp::millis")]
    pub updated_at: Timestamp,

    /// Owner
    pub user_id: UserId,
}

impl_record!(Client, ClientId, clients, "client");
impl_owned!(Client);

/// Input for creating a new client
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: Option<String>,

    pub company: Option<String>,

    pub notes: Option<String>,

    #[serde(default)]
    pub status: ClientStatus,

    pub user_id: UserId,
}

/// Input for updating a client
///
/// All fields are optional. Only non-None fields will be updated; use
/// `Some(None)` to clear an optional field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateClient {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub phone: Option<Option<String>>,

    pub company: Option<Option<String>>,

    pub notes: Option<Option<String>>,

    pub status: Option<ClientStatus>,
}

impl UpdateClient {
    fn apply_to(self, client: &mut Client) {
        if let Some(name) = self.name {
            client.name = name;
        }
        if let Some(email) = self.email {
            client.email = email;
        }
        patch_text(&mut client.phone, self.phone);
        patch_text(&mut client.company, self.company);
        patch_text(&mut client.notes, self.notes);
        if let Some(status) = self.status {
            client.status = status;
        }
    }
}

impl Client {
    /// Creates a new client
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the document cannot be saved.
    pub fn create(store: &DataStore, mut data: CreateClient) -> StoreResult<Self> {
        data.name = trimmed(data.name);
        data.validate()?;

        super::insert(store, |id, now| Client {
            id,
            name: data.name,
            email: data.email,
            phone: non_blank(data.phone),
            company: non_blank(data.company),
            status: data.status,
            notes: non_blank(data.notes),
            created_at: now,
            updated_at: now,
            user_id: data.user_id,
        })
    }

    /// Finds a client by ID
    pub fn find_by_id(store: &DataStore, id: &ClientId) -> StoreResult<Option<Self>> {
        super::find(store, id)
    }

    /// Lists the clients of a user in storage order
    pub fn list_by_user(store: &DataStore, user_id: &UserId) -> StoreResult<Vec<Self>> {
        super::list_owned(store, user_id)
    }

    /// Updates a client
    ///
    /// # Returns
    ///
    /// The updated client, or `None` if no client has `id`
    pub fn update(store: &DataStore, id: &ClientId, mut data: UpdateClient) -> StoreResult<Option<Self>> {
        data.name = data.name.map(trimmed);
        data.validate()?;
        super::modify(store, id, |client: &mut Client| data.apply_to(client))
    }

    /// Deletes a client
    ///
    /// Records referencing the client are left as they are.
    ///
    /// # Returns
    ///
    /// `true` if a client was removed, `false` if none had `id`
    pub fn delete(store: &DataStore, id: &ClientId) -> StoreResult<bool> {
        super::remove::<Client>(store, id)
    }
}
