//! # FreelancerPro CLI Library
//!
//! Command-line front end over the shared data layer. The binary in
//! `main.rs` only sets up logging and hands the parsed arguments to [`run`].
//!
//! ## Modules
//!
//! - `cli`: Argument definitions
//! - `commands`: One handler per subcommand
//! - `config`: Store configuration with command-line overrides
//! - `error`: Error type and exit codes

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use commands::run;
pub use error::{CliError, CliResult};
