//! Configuration for the command-line front end
//!
//! The store configuration is read from the environment (and `.env`) by
//! [`StoreConfig::from_env`]; flags given on the command line win.
//!
//! # Precedence
//!
//! 1. `--data-dir`, `--load-policy`
//! 2. `FREELANCER_DATA_DIR`, `FREELANCER_LOAD_POLICY`
//! 3. Defaults (`./data`, lenient)
//!
//! # Environment Variables
//!
//! - `FREELANCER_LOG_FORMAT`: `json` for JSON log lines on stderr (default: text)
//! - `RUST_LOG`: Log filter (default: `freelancer_cli=info,freelancer_shared=info`)

use crate::cli::Cli;
use freelancer_shared::config::{ConfigError, StoreConfig};
use std::env;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "freelancer_cli=info,freelancer_shared=info";

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Reads `FREELANCER_LOG_FORMAT`; anything but `json` means text
    pub fn from_env() -> Self {
        Self::parse(env::var("FREELANCER_LOG_FORMAT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Resolves the store configuration for this invocation
///
/// # Errors
///
/// Returns an error if an environment variable has an invalid value.
pub fn store_config(cli: &Cli) -> Result<StoreConfig, ConfigError> {
    Ok(apply_overrides(StoreConfig::from_env()?, cli))
}

/// Applies command-line flags on top of `base`
pub fn apply_overrides(mut base: StoreConfig, cli: &Cli) -> StoreConfig {
    if let Some(dir) = &cli.data_dir {
        base.data_dir = dir.clone();
    }
    if let Some(policy) = cli.load_policy {
        base.load_policy = policy;
    }
    base
}
