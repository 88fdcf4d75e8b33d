//! User model and store operations
//!
//! Users are the accounts of the dashboard. Every other record carries the
//! `userId` of the user who owns it.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "id": "lq2x8k1a9f3h2kd8s0p",
//!   "email": "demo@freelancerpro.com",
//!   "name": "Demo User",
//!   "password": "$argon2id$v=19$m=65536,t=3,p=4$...",
//!   "role": "freelancer",
//!   "createdAt": "2024-01-01T00:00:00.000Z",
//!   "updatedAt": "2024-01-01T00:00:00.000Z"
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use freelancer_shared::models::user::{CreateUser, User, UserRole};
//! use freelancer_shared::store::DataStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DataStore::in_memory();
//!
//! let user = User::create(&store, CreateUser {
//!     email: "Jane@Example.com".to_string(),
//!     name: "Jane".to_string(),
//!     password: "$argon2id$...".to_string(),
//!     role: UserRole::Freelancer,
//! })?;
//!
//! // Emails are matched case-insensitively
//! let found = User::find_by_email(&store, "jane@example.com")?;
//! assert_eq!(found.map(|u| u.id), Some(user.id));
//! # Ok(())
//! # }
//! ```

use crate::ids::UserId;
use crate::store::{DataStore, StoreError, StoreResult};
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular account managing its own business
    #[default]
    Freelancer,

    /// Administrative account
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Freelancer => "freelancer",
            UserRole::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// User account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,

    /// Login key, stored trimmed and lower-cased
    pub email: String,

    /// Display name
    pub name: String,

    /// Argon2id password hash
    ///
    /// Empty in copies handed out by the auth layer.
    pub password: String,

    pub role: UserRole,

    #[serde(with = "crate::timestamp::millis")]
    pub created_at: Timestamp,

    #[serde(with = "crate::timestamp::millis")]
    pub updated_at: Timestamp,
}

impl_record!(User, UserId, users, "user");

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    /// Password hash (NOT the plaintext password)
    pub password: String,

    #[serde(default)]
    pub role: UserRole,
}

/// Canonical form of an email used as login key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl User {
    /// Creates a new user
    ///
    /// # Errors
    ///
    /// - `StoreError::Validation` if the email or name is invalid
    /// - `StoreError::Duplicate` if the email is already registered
    /// - `StoreError::Backend` if the document cannot be saved
    pub fn create(store: &DataStore, data: CreateUser) -> StoreResult<Self> {
        data.validate()?;

        let email = normalize_email(&data.email);
        if Self::find_by_email(store, &email)?.is_some() {
            return Err(StoreError::Duplicate {
                kind: "user",
                field: "email",
            });
        }

        super::insert(store, |id, now| User {
            id,
            email,
            name: data.name.trim().to_string(),
            password: data.password,
            role: data.role,
            created_at: now,
            updated_at: now,
        })
    }

    /// Finds a user by ID
    pub fn find_by_id(store: &DataStore, id: &UserId) -> StoreResult<Option<Self>> {
        super::find(store, id)
    }

    /// Finds a user by email (case-insensitive)
    pub fn find_by_email(store: &DataStore, email: &str) -> StoreResult<Option<Self>> {
        let wanted = normalize_email(email);
        let document = store.read()?;

        Ok(document
            .users
            .into_iter()
            .find(|user| normalize_email(&user.email) == wanted))
    }

    /// Copy of the user with the password hash blanked
    pub fn without_password(mut self) -> Self {
        self.password.clear();
        self
    }

    #[cfg(test)]
    pub(crate) fn test_fixture(id: &str, email: &str) -> Self {
        let now = crate::timestamp::now();
        User {
            id: UserId::new(id),
            email: email.to_string(),
            name: "Test User".to_string(),
            password: String::new(),
            role: UserRole::Freelancer,
            created_at: now,
            updated_at: now,
        }
    }
}
