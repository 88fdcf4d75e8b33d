//! Current-user marker
//!
//! The signed-in user is stored as a serialized [`User`] (password blanked)
//! under [`SESSION_KEY`], next to the data document on the same backend.
//! There is no expiry; the marker stays until logout.

use crate::models::user::User;
use crate::store::{StorageBackend, StoreError, StoreResult, SESSION_KEY};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Handle on the current-user marker
#[derive(Clone)]
pub struct Session {
    backend: Arc<dyn StorageBackend>,
}

impl Session {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Returns the signed-in user, if any
    ///
    /// An unreadable or corrupt marker reads as "nobody signed in".
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.backend.read(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read session marker");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Ignoring corrupt session marker");
                None
            }
        }
    }

    /// Replaces the marker; `None` signs out
    ///
    /// The password hash is never written to the marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker cannot be written or removed.
    pub fn set_current_user(&self, user: Option<&User>) -> StoreResult<()> {
        match user {
            Some(user) => {
                let marker = user.clone().without_password();
                let raw = serde_json::to_string(&marker).map_err(StoreError::Serialize)?;
                self.backend.write(SESSION_KEY, &raw)?;
                info!(user_id = %marker.id, "Signed in");
            }
            None => {
                self.backend.remove(SESSION_KEY)?;
                debug!("Session marker cleared");
            }
        }
        Ok(())
    }

    /// Signs out
    pub fn logout(&self) -> StoreResult<()> {
        self.set_current_user(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;

    fn session() -> (Arc<MemoryBackend>, Session) {
        let backend = Arc::new(MemoryBackend::new());
        let session = Session::new(backend.clone());
        (backend, session)
    }

    #[test]
    fn test_no_marker_means_no_user() {
        let (_, session) = session();
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_marker_blanks_password() {
        let (backend, session) = session();
        let user = User {
            password: "$argon2id$hash".to_string(),
            ..User::test_fixture("u1", "a@b.com")
        };

        session.set_current_user(Some(&user)).unwrap();

        let raw = backend.read(SESSION_KEY).unwrap().unwrap();
        assert!(!raw.contains("argon2id"));
        let current = session.current_user().unwrap();
        assert_eq!(current.id, user.id);
        assert!(current.password.is_empty());
    }

    #[test]
    fn test_logout_clears_marker() {
        let (backend, session) = session();
        session
            .set_current_user(Some(&User::test_fixture("u1", "a@b.com")))
            .unwrap();

        session.logout().unwrap();

        assert_eq!(session.current_user(), None);
        assert_eq!(backend.read(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_marker_reads_as_no_user() {
        let (backend, session) = session();
        backend.write(SESSION_KEY, "not json").unwrap();
        assert_eq!(session.current_user(), None);
    }
}
