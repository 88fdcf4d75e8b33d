//! Quote model and store operations
//!
//! A quote is a priced proposal sent to a client. Accepted quotes make up
//! the revenue figure on the dashboard.

use super::{check_amount, non_blank, patch_date, patch_text, patch_value, trimmed};
use crate::ids::{ClientId, ProjectId, QuoteId, UserId};
use crate::store::{DataStore, StoreResult};
use crate::timestamp::{self, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Quote status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Rejected,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 4] = [
        QuoteStatus::Draft,
        QuoteStatus::Sent,
        QuoteStatus::Accepted,
        QuoteStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "draft",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::Rejected => "rejected",
        }
    }
}

/// Quote record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Quoted price, never negative
    pub amount: f64,

    pub status: QuoteStatus,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::millis_option"
    )]
    pub valid_until: Option<Timestamp>,

    #[serde(with = "crate::timestamp::millis")]
    pub created_at: Timestamp,

    #[serde(with = "crate::timestamp::millis")]
    pub updated_at: Timestamp,

    pub user_id: UserId,

    pub client_id: ClientId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
}

impl_record!(Quote, QuoteId, quotes, "quote");
impl_owned!(Quote);

/// Input for creating a new quote
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateQuote {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,

    #[serde(default)]
    pub status: QuoteStatus,

    pub valid_until: Option<Timestamp>,

    pub user_id: UserId,

    pub client_id: ClientId,

    pub project_id: Option<ProjectId>,
}

/// Input for updating a quote
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateQuote {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    pub description: Option<Option<String>>,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: Option<f64>,

    pub status: Option<QuoteStatus>,

    pub valid_until: Option<Option<Timestamp>>,

    pub client_id: Option<ClientId>,

    pub project_id: Option<Option<ProjectId>>,
}

impl UpdateQuote {
    fn apply_to(self, quote: &mut Quote) {
        if let Some(title) = self.title {
            quote.title = title;
        }
        patch_text(&mut quote.description, self.description);
        if let Some(amount) = self.amount {
            quote.amount = amount;
        }
        if let Some(status) = self.status {
            quote.status = status;
        }
        patch_date(&mut quote.valid_until, self.valid_until);
        if let Some(client_id) = self.client_id {
            quote.client_id = client_id;
        }
        patch_value(&mut quote.project_id, self.project_id);
    }
}

impl Quote {
    /// Creates a new quote
    ///
    /// # Errors
    ///
    /// Returns an error if the title is blank, the amount is negative or not
    /// finite, or the document cannot be saved.
    pub fn create(store: &DataStore, mut data: CreateQuote) -> StoreResult<Self> {
        data.title = trimmed(data.title);
        data.validate()?;
        check_amount("amount", Some(Some(data.amount)))?;

        super::insert(store, |id, now| Quote {
            id,
            title: data.title,
            description: non_blank(data.description),
            amount: data.amount,
            status: data.status,
            valid_until: data.valid_until.map(timestamp::truncate),
            created_at: now,
            updated_at: now,
            user_id: data.user_id,
            client_id: data.client_id,
            project_id: data.project_id,
        })
    }

    pub fn find_by_id(store: &DataStore, id: &QuoteId) -> StoreResult<Option<Self>> {
        super::find(store, id)
    }

    pub fn list_by_user(store: &DataStore, user_id: &UserId) -> StoreResult<Vec<Self>> {
        super::list_owned(store, user_id)
    }

    /// Updates a quote, `None` if no quote has `id`
    pub fn update(store: &DataStore, id: &QuoteId, mut data: UpdateQuote) -> StoreResult<Option<Self>> {
        data.title = data.title.map(trimmed);
        data.validate()?;
        check_amount("amount", data.amount.map(Some))?;
        super::modify(store, id, |quote: &mut Quote| data.apply_to(quote))
    }

    pub fn is_accepted(&self) -> bool {
        self.status == QuoteStatus::Accepted
    }
}
