//! Error handling for the command-line front end
//!
//! Every command returns [`CliResult`]. Each variant maps to a process exit
//! code so scripts can tell user mistakes from storage failures.
//!
//! | Variant | Exit code |
//! |---------|-----------|
//! | `NotSignedIn`, `NotFound`, `Auth` | 1 |
//! | `Config` | 2 |
//! | `Store`, `Seed`, `Output`, `Json` | 3 |

use freelancer_shared::auth::AuthError;
use freelancer_shared::config::ConfigError;
use freelancer_shared::demo::SeedError;
use freelancer_shared::store::StoreError;

/// CLI result type alias
pub type CliResult<T> = Result<T, CliError>;

/// Unified CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The command needs a signed-in user
    #[error("Not signed in. Run `freelancer login` or `freelancer demo` first")]
    NotSignedIn,

    /// A record named on the command line does not exist
    #[error("No {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    /// Writing to stdout failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::NotSignedIn | CliError::NotFound { .. } | CliError::Auth(_) => 1,
            CliError::Config(_) => 2,
            CliError::Store(_) | CliError::Seed(_) | CliError::Output(_) | CliError::Json(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::NotSignedIn.exit_code(), 1);
        assert_eq!(CliError::Auth(AuthError::InvalidPassword).exit_code(), 1);
        assert_eq!(
            CliError::Config(ConfigError::InvalidValue("X".into(), "y".into())).exit_code(),
            2
        );
        assert_eq!(
            CliError::Store(StoreError::Duplicate { kind: "user", field: "email" }).exit_code(),
            3
        );
    }

    #[test]
    fn test_messages() {
        let err = CliError::NotFound {
            kind: "task",
            id: "t-9".to_string(),
        };
        assert_eq!(err.to_string(), "No task with id 't-9'");
        assert_eq!(
            CliError::Auth(AuthError::UserNotFound).to_string(),
            "User not found"
        );
    }
}
