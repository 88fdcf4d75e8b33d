//! The read-modify-write document store
//!
//! [`DataStore`] owns a storage backend and knows how to load and save the
//! aggregate document. Model operations go through [`DataStore::read`] and
//! [`DataStore::apply`], which honor the configured [`LoadPolicy`].

use super::backend::{MemoryBackend, StorageBackend};
use super::document::{AppData, DATA_KEY};
use super::{StoreError, StoreResult};
use crate::config::StoreConfig;
use crate::store::FileBackend;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// How a stored document that fails to deserialize is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Corrupt or unreadable documents read as the empty document
    ///
    /// The next write replaces whatever was stored.
    #[default]
    Lenient,

    /// Corrupt or unreadable documents are reported as errors
    Strict,
}

impl LoadPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPolicy::Lenient => "lenient",
            LoadPolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(LoadPolicy::Lenient),
            "strict" => Ok(LoadPolicy::Strict),
            other => Err(format!("'{}' is not a load policy (lenient|strict)", other)),
        }
    }
}

/// Outcome of a document mutation
///
/// `Commit` writes the changed document back, `Discard` leaves storage
/// untouched (for example an update whose target does not exist).
pub(crate) enum Change<T> {
    Commit(T),
    Discard(T),
}

/// Single-document store over a storage backend
#[derive(Clone)]
pub struct DataStore {
    backend: Arc<dyn StorageBackend>,
    policy: LoadPolicy,
}

impl fmt::Debug for DataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStore")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl DataStore {
    /// Creates a lenient store over `backend`
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            policy: LoadPolicy::default(),
        }
    }

    /// Creates a store over a fresh [`MemoryBackend`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Opens a file-backed store as described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or written.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let backend = FileBackend::open(&config.data_dir)?;
        Ok(Self::new(Arc::new(backend)).with_policy(config.load_policy))
    }

    /// Sets the load policy used by model operations
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Shared handle to the backend (the session marker lives there too)
    pub fn backend(&self) -> Arc<dyn StorageBackend> {
        Arc::clone(&self.backend)
    }

    /// Loads the document, falling back to the empty document
    ///
    /// Never fails: an absent document, a backend read error and a corrupt
    /// document all yield [`AppData::default`]. The latter two are logged.
    pub fn load(&self) -> AppData {
        match self.load_strict() {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "Falling back to empty document");
                AppData::default()
            }
        }
    }

    /// Loads the document, distinguishing absent from corrupt
    ///
    /// # Errors
    ///
    /// - `StoreError::Backend` if the medium cannot be read
    /// - `StoreError::Corrupt` if a stored document does not deserialize
    pub fn load_strict(&self) -> StoreResult<AppData> {
        let Some(raw) = self.backend.read(DATA_KEY)? else {
            debug!("No stored document, using empty document");
            return Ok(AppData::default());
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: DATA_KEY.to_string(),
            source,
        })
    }

    /// Serializes and persists the whole document
    ///
    /// # Errors
    ///
    /// Returns an error (and logs it) if serialization or the write fails.
    pub fn save(&self, document: &AppData) -> StoreResult<()> {
        let raw = serde_json::to_string(document).map_err(StoreError::Serialize)?;

        if let Err(e) = self.backend.write(DATA_KEY, &raw) {
            error!(error = %e, "Failed to save document");
            return Err(e.into());
        }

        debug!(records = document.record_count(), bytes = raw.len(), "Saved document");
        Ok(())
    }

    /// True when the stored document contains at least one user
    pub fn has_data(&self) -> bool {
        self.load_strict()
            .map(|document| !document.users.is_empty())
            .unwrap_or(false)
    }

    /// Loads the document according to the store's policy
    pub fn read(&self) -> StoreResult<AppData> {
        match self.policy {
            LoadPolicy::Lenient => Ok(self.load()),
            LoadPolicy::Strict => self.load_strict(),
        }
    }

    /// Runs one read-modify-write cycle
    pub(crate) fn apply<T>(&self, op: impl FnOnce(&mut AppData) -> Change<T>) -> StoreResult<T> {
        let mut document = self.read()?;
        match op(&mut document) {
            Change::Commit(value) => {
                self.save(&document)?;
                Ok(value)
            }
            Change::Discard(value) => Ok(value),
        }
    }
}
