//! Subcommand handlers
//!
//! Handlers write their results to the given writer (stdout in the binary)
//! and leave logging to `tracing`, which goes to stderr.
//!
//! # Modules
//!
//! - `account`: register, login, logout, whoami
//! - `demo`: demo workspace seeding
//! - `dashboard`: summary
//! - `clients`: client listing with filters
//! - `board`: Kanban board and task moves

pub mod account;
pub mod board;
pub mod clients;
pub mod dashboard;
pub mod demo;

use crate::cli::{Cli, Command};
use crate::error::{CliError, CliResult};
use chrono::{DateTime, Utc};
use freelancer_shared::auth::{Authenticator, Session};
use freelancer_shared::config::StoreConfig;
use freelancer_shared::models::user::User;
use freelancer_shared::store::DataStore;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// State shared by the handlers of one invocation
pub struct Context {
    pub store: DataStore,

    /// Print JSON instead of text
    pub json: bool,
}

impl Context {
    pub fn new(store: DataStore, json: bool) -> Self {
        Self { store, json }
    }

    pub fn auth(&self) -> Authenticator<'_> {
        Authenticator::new(&self.store)
    }

    pub fn session(&self) -> Session {
        Session::new(self.store.backend())
    }

    /// The signed-in user, or `CliError::NotSignedIn`
    pub fn require_user(&self) -> CliResult<User> {
        self.session().current_user().ok_or(CliError::NotSignedIn)
    }

    /// Writes `value` as pretty JSON followed by a newline
    pub fn write_json<T: Serialize>(&self, out: &mut dyn Write, value: &T) -> CliResult<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Runs one parsed command against the configured store
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the command fails.
pub fn run(cli: Cli, config: &StoreConfig, out: &mut dyn Write) -> CliResult<()> {
    debug!(data_dir = %config.data_dir.display(), policy = %config.load_policy, "Opening store");
    let ctx = Context::new(DataStore::open(config)?, cli.json);

    match cli.command {
        Command::Demo => demo::load(&ctx, out),
        Command::Register {
            email,
            name,
            password,
        } => account::register(&ctx, out, &email, &name, &password),
        Command::Login { email, password } => account::login(&ctx, out, &email, &password),
        Command::Logout => account::logout(&ctx, out),
        Command::Whoami => account::whoami(&ctx, out),
        Command::Summary => dashboard::summary(&ctx, out),
        Command::Clients { query, status } => clients::list(&ctx, out, query, status),
        Command::Board => board::show(&ctx, out),
        Command::MoveTask { id, status } => board::move_task(&ctx, out, &id, status),
    }
}

/// Calendar date used in listings
pub(crate) fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}
