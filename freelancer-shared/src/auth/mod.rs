//! Local authentication
//!
//! Accounts live in the `users` collection of the document; the signed-in
//! user is tracked by a separate marker (see [`session`]). This is a
//! hash comparison against records on the same device, not a security
//! boundary: no tokens, no expiry, no attempt limits.
//!
//! # Modules
//!
//! - [`password`]: Argon2id password hashing
//! - [`session`]: The current-user marker
//!
//! # Example
//!
//! ```
//! use freelancer_shared::auth::{AuthError, Authenticator};
//! use freelancer_shared::store::DataStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DataStore::in_memory();
//! let auth = Authenticator::new(&store);
//!
//! let user = auth.register("jane@example.com", "s3cret!", "Jane")?;
//! assert!(user.password.is_empty());
//!
//! auth.logout()?;
//! let again = auth.login("jane@example.com", "s3cret!")?;
//! assert_eq!(again.id, user.id);
//!
//! let wrong = auth.login("jane@example.com", "nope");
//! assert!(matches!(wrong, Err(AuthError::InvalidPassword)));
//! # Ok(())
//! # }
//! ```

pub mod password;
pub mod session;

pub use session::Session;

use crate::models::user::{CreateUser, User, UserRole};
use crate::store::{DataStore, StoreError};
use password::PasswordError;
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

/// Error type for authentication
///
/// `Display` yields a message suitable for showing to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("A user with this email already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Incorrect password")]
    InvalidPassword,

    /// Registration input was rejected
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { .. } => AuthError::UserAlreadyExists,
            StoreError::Validation(errors) => AuthError::Validation(errors.to_string()),
            other => AuthError::Store(other),
        }
    }
}

/// Registration form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,

    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

impl RegisterRequest {
    fn check(&self) -> Result<(), AuthError> {
        RegisterRequest {
            email: self.email.trim().to_string(),
            password: String::new(),
            name: self.name.trim().to_string(),
        }
        .validate()
        .map_err(|e| AuthError::Validation(e.to_string()))?;

        password::validate_password_length(&self.password).map_err(AuthError::Validation)
    }
}

/// Registration and login over a document store
pub struct Authenticator<'a> {
    store: &'a DataStore,
    session: Session,
}

impl<'a> Authenticator<'a> {
    /// Authenticator whose session marker lives on the store's backend
    pub fn new(store: &'a DataStore) -> Self {
        Self {
            store,
            session: Session::new(store.backend()),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Creates an account and signs it in
    ///
    /// # Returns
    ///
    /// The new user with the password hash blanked
    ///
    /// # Errors
    ///
    /// - `AuthError::Validation` for a malformed email, empty name or short password
    /// - `AuthError::UserAlreadyExists` if the email is taken
    pub fn register(&self, email: &str, password: &str, name: &str) -> Result<User, AuthError> {
        self.register_with(RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        })
    }

    /// Same as [`Authenticator::register`] with a prepared request
    pub fn register_with(&self, request: RegisterRequest) -> Result<User, AuthError> {
        request.check()?;

        if User::find_by_email(self.store, &request.email)?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let hash = password::hash_password(&request.password)?;
        let user = User::create(
            self.store,
            CreateUser {
                email: request.email.trim().to_string(),
                name: request.name,
                password: hash,
                role: UserRole::Freelancer,
            },
        )?;

        self.session.set_current_user(Some(&user))?;
        info!(user_id = %user.id, "Registered user");

        Ok(user.without_password())
    }

    /// Verifies credentials and signs the user in
    ///
    /// # Errors
    ///
    /// - `AuthError::UserNotFound` if no account has `email`
    /// - `AuthError::InvalidPassword` if the password does not match
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = User::find_by_email(self.store, email)?.ok_or(AuthError::UserNotFound)?;

        let matches = match password::verify_password(password, &user.password) {
            Ok(matches) => matches,
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Stored password is not a usable hash");
                false
            }
        };

        if !matches {
            return Err(AuthError::InvalidPassword);
        }

        self.session.set_current_user(Some(&user))?;
        info!(user_id = %user.id, "Logged in");

        Ok(user.without_password())
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    pub fn set_current_user(&self, user: Option<&User>) -> Result<(), AuthError> {
        Ok(self.session.set_current_user(user)?)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        Ok(self.session.logout()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_signs_in() {
        let store = DataStore::in_memory();
        let auth = Authenticator::new(&store);

        let user = auth.register("Jane@Example.com", "secret1", "Jane").unwrap();

        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.role, UserRole::Freelancer);
        assert!(user.password.is_empty());
        assert_eq!(auth.current_user().map(|u| u.id), Some(user.id.clone()));

        let stored = User::find_by_id(&store, &user.id).unwrap().unwrap();
        assert!(stored.password.starts_with("$argon2id$"));
    }

    #[test]
    fn test_register_existing_email() {
        let store = DataStore::in_memory();
        let auth = Authenticator::new(&store);
        auth.register("jane@example.com", "secret1", "Jane").unwrap();

        let result = auth.register("jane@example.com", "other12", "Other");
        assert!(matches!(result, Err(AuthError::UserAlreadyExists)));
        assert_eq!(store.load().users.len(), 1);
    }

    #[test]
    fn test_register_validation() {
        let store = DataStore::in_memory();
        let auth = Authenticator::new(&store);

        assert!(matches!(
            auth.register("not-an-email", "secret1", "Jane"),
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            auth.register("jane@example.com", "abc", "Jane"),
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            auth.register("jane@example.com", "secret1", "   "),
            Err(AuthError::Validation(_))
        ));
        assert!(store.load().users.is_empty());
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_login_failures() {
        let store = DataStore::in_memory();
        let auth = Authenticator::new(&store);
        auth.register("jane@example.com", "secret1", "Jane").unwrap();
        auth.logout().unwrap();

        assert!(matches!(
            auth.login("nobody@example.com", "secret1"),
            Err(AuthError::UserNotFound)
        ));
        assert!(matches!(
            auth.login("jane@example.com", "wrong!!"),
            Err(AuthError::InvalidPassword)
        ));
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_login_with_unusable_stored_hash() {
        let store = DataStore::in_memory();
        User::create(
            &store,
            CreateUser {
                email: "old@example.com".to_string(),
                name: "Old".to_string(),
                password: "$2a$10$not.an.argon.hash".to_string(),
                role: UserRole::Freelancer,
            },
        )
        .unwrap();

        let result = Authenticator::new(&store).login("old@example.com", "anything");
        assert!(matches!(result, Err(AuthError::InvalidPassword)));
    }

    #[test]
    fn test_error_messages_are_readable() {
        assert_eq!(AuthError::UserNotFound.to_string(), "User not found");
        assert_eq!(AuthError::InvalidPassword.to_string(), "Incorrect password");
        assert_eq!(
            AuthError::UserAlreadyExists.to_string(),
            "A user with this email already exists"
        );
    }
}
