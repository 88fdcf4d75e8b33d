//! Configuration management
//!
//! Configuration comes from environment variables, with a `.env` file in the
//! working directory loaded first for development.
//!
//! # Environment Variables
//!
//! - `FREELANCER_DATA_DIR`: Directory holding the stored documents (default: `./data`)
//! - `FREELANCER_LOAD_POLICY`: `lenient` or `strict` (default: `lenient`)
//! - `RUST_LOG`: Log filter, read by the binary's subscriber
//!
//! # Example
//!
//! ```no_run
//! use freelancer_shared::config::StoreConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::from_env()?;
//! println!("Documents live in {}", config.data_dir.display());
//! # Ok(())
//! # }
//! ```

use crate::store::LoadPolicy;
use std::path::PathBuf;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory for the file backend
    pub data_dir: PathBuf,

    /// How corrupt documents are handled
    pub load_policy: LoadPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            load_policy: LoadPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Keep tests hermetic
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("FREELANCER_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let load_policy = match lookup("FREELANCER_LOAD_POLICY") {
            Some(raw) => raw.parse::<LoadPolicy>().map_err(|e| {
                ConfigError::InvalidValue("FREELANCER_LOAD_POLICY".to_string(), e)
            })?,
            None => defaults.load_policy,
        };

        Ok(Self {
            data_dir,
            load_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.load_policy, LoadPolicy::Lenient);
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("FREELANCER_DATA_DIR", "/tmp/freelancer"),
            ("FREELANCER_LOAD_POLICY", "strict"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/freelancer"));
        assert_eq!(config.load_policy, LoadPolicy::Strict);
    }

    #[test]
    fn test_invalid_policy() {
        let result = StoreConfig::from_lookup(lookup(&[("FREELANCER_LOAD_POLICY", "yolo")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(var, _)) if var == "FREELANCER_LOAD_POLICY"));
    }

    #[test]
    fn test_blank_data_dir_uses_default() {
        let config = StoreConfig::from_lookup(lookup(&[("FREELANCER_DATA_DIR", "  ")])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
