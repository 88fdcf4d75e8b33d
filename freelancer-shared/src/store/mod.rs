//! Local document store for FreelancerPro
//!
//! All records live in one JSON document ([`AppData`]) stored under a single
//! key of a key/value [`StorageBackend`]. Every operation reads the whole
//! document, changes one collection and writes the whole document back.
//!
//! # Modules
//!
//! - `backend`: The storage port and the in-memory backend
//! - `file`: Directory-backed storage (one JSON file per key)
//! - `document`: The aggregate document and its storage keys
//! - `data_store`: Load/save policy and the read-modify-write helper
//!
//! # Concurrency
//!
//! There is no locking across operations. Two stores writing the same
//! backend concurrently are last-write-wins; the store is meant for one
//! user in one process.
//!
//! # Example
//!
//! ```no_run
//! use freelancer_shared::store::{DataStore, FileBackend, LoadPolicy};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = FileBackend::open("./data")?;
//! let store = DataStore::new(Arc::new(backend)).with_policy(LoadPolicy::Strict);
//!
//! let document = store.load_strict()?;
//! println!("{} users on this device", document.users.len());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod data_store;
pub mod document;
pub mod file;

pub use backend::{BackendError, MemoryBackend, StorageBackend};
pub use data_store::{DataStore, LoadPolicy};
pub use document::{AppData, DATA_KEY, SESSION_KEY};
pub use file::FileBackend;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage medium failed to read or write
    #[error("Storage backend error: {0}")]
    Backend(#[from] BackendError),

    /// A stored document exists but could not be deserialized
    #[error("Stored document under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A document could not be serialized
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Input failed validation before it reached the document
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A record with the same unique value already exists
    #[error("A {kind} with this {field} already exists")]
    Duplicate {
        kind: &'static str,
        field: &'static str,
    },
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;
