//! Contract model and store operations

use super::{patch_date, patch_value, trimmed};
use crate::ids::{ClientId, ContractId, ProjectId, UserId};
use crate::store::{DataStore, StoreResult};
use crate::timestamp::{self, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contract status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    #[default]
    Draft,
    Sent,
    Signed,
    Expired,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 4] = [
        ContractStatus::Draft,
        ContractStatus::Sent,
        ContractStatus::Signed,
        ContractStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Draft => "draft",
            ContractStatus::Sent => "sent",
            ContractStatus::Signed => "signed",
            ContractStatus::Expired => "expired",
        }
    }
}

/// Contract record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: ContractId,

    pub title: String,

    /// Full contract text
    #[serde(default)]
    pub content: String,

    pub status: ContractStatus,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::millis_option"
    )]
    pub signed_date: Option<Timestamp>,

    #[serde(with = "crate::timestamp::millis")]
    pub created_at: Timestamp,

    #[serde(with = "crate::timestamp::millis")]
    pub updated_at: Timestamp,

    pub user_id: UserId,

    pub client_id: ClientId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
}

impl_record!(Contract, ContractId, contracts, "contract");
impl_owned!(Contract);

/// Input for creating a new contract
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateContract {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub status: ContractStatus,

    pub signed_date: Option<Timestamp>,

    pub user_id: UserId,

    pub client_id: ClientId,

    pub project_id: Option<ProjectId>,
}

/// Input for updating a contract
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateContract {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    pub content: Option<String>,

    pub status: Option<ContractStatus>,

    pub signed_date: Option<Option<Timestamp>>,

    pub client_id: Option<ClientId>,

    pub project_id: Option<Option<ProjectId>>,
}

impl UpdateContract {
    fn apply_to(self, contract: &mut Contract) {
        if let Some(title) = self.title {
            contract.title = title;
        }
        if let Some(content) = self.content {
            contract.content = content;
        }
        if let Some(status) = self.status {
            contract.status = status;
        }
        patch_date(&mut contract.signed_date, self.signed_date);
        if let Some(client_id) = self.client_id {
            contract.client_id = client_id;
        }
        patch_value(&mut contract.project_id, self.project_id);
    }
}

impl Contract {
    /// Creates a new contract
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty or the document cannot be saved.
    pub fn create(store: &DataStore, mut data: CreateContract) -> StoreResult<Self> {
        data.title = trimmed(data.title);
        data.validate()?;

        super::insert(store, |id, now| Contract {
            id,
            title: data.title,
            content: data.content,
            status: data.status,
            signed_date: data.signed_date.map(timestamp::truncate),
            created_at: now,
            updated_at: now,
            user_id: data.user_id,
            client_id: data.client_id,
            project_id: data.project_id,
        })
    }

    pub fn find_by_id(store: &DataStore, id: &ContractId) -> StoreResult<Option<Self>> {
        super::find(store, id)
    }

    pub fn list_by_user(store: &DataStore, user_id: &UserId) -> StoreResult<Vec<Self>> {
        super::list_owned(store, user_id)
    }

    /// Updates a contract, `None` if no contract has `id`
    pub fn update(
        store: &DataStore,
        id: &ContractId,
        mut data: UpdateContract,
    ) -> StoreResult<Option<Self>> {
        data.title = data.title.map(trimmed);
        data.validate()?;
        super::modify(store, id, |contract: &mut Contract| data.apply_to(contract))
    }
}
