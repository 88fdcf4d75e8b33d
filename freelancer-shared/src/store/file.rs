//! Directory-backed storage
//!
//! Each key is stored as `<dir>/<key>.json`. Writes go to a hidden temporary
//! file in the same directory which is then renamed over the target, so a
//! crash mid-write leaves the previous document intact.
//!
//! # Example
//!
//! ```no_run
//! use freelancer_shared::store::{FileBackend, StorageBackend};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = FileBackend::open("./data")?;
//! backend.write("freelancer_app_data", "{}")?;
//! assert!(backend.read("freelancer_app_data")?.is_some());
//! # Ok(())
//! # }
//! ```

use super::backend::{BackendError, StorageBackend};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Storage backend writing one file per key into a directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Opens (and creates if needed) a data directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or is not writable.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, BackendError> {
        let dir = dir.into();
        info!(dir = %dir.display(), "Opening file storage");

        fs::create_dir_all(&dir).map_err(|source| BackendError::Io {
            key: dir.display().to_string(),
            source,
        })?;

        let backend = Self { dir };
        backend.health_check()?;

        Ok(backend)
    }

    /// Directory holding the stored files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Verifies the directory accepts writes
    ///
    /// Writes and removes a marker key.
    pub fn health_check(&self) -> Result<(), BackendError> {
        debug!(dir = %self.dir.display(), "Performing storage health check");
        self.write("health_check", "{}")?;
        self.remove("health_check")?;
        debug!("Storage health check passed");
        Ok(())
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, BackendError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BackendError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, BackendError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(BackendError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        let io_err = |source| BackendError::Io {
            key: key.to_string(),
            source,
        };

        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;

        debug!(key, bytes = value.len(), "Wrote storage key");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(BackendError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}
