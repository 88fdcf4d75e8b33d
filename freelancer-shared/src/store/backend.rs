//! Storage port
//!
//! A [`StorageBackend`] is a string key/value medium, the role browser
//! `localStorage` plays for the web dashboard. The store never touches a
//! concrete medium directly, so tests run against [`MemoryBackend`].

use std::collections::HashMap;
use std::sync::Mutex;

/// Error type for storage backends
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// I/O on the underlying medium failed
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the medium
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// A writer panicked while holding the backend lock
    #[error("Storage backend lock poisoned")]
    Poisoned,
}

/// Key/value storage medium
///
/// Implementations must treat `write` as replacing the whole value.
pub trait StorageBackend: Send + Sync {
    /// Reads the value stored under `key`, `None` if absent
    fn read(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Stores `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Removes `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), BackendError>;
}

/// In-process backend
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, BackendError> {
        let entries = self.entries.lock().map_err(|_| BackendError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let mut entries = self.entries.lock().map_err(|_| BackendError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        let mut entries = self.entries.lock().map_err(|_| BackendError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_read_write_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("k").unwrap(), None);

        backend.write("k", "v1").unwrap();
        backend.write("k", "v2").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v2"));

        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);

        // Removing twice is fine
        backend.remove("k").unwrap();
    }
}
