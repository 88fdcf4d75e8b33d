//! # FreelancerPro CLI
//!
//! Command-line front end for the FreelancerPro local data store: clients,
//! projects, tasks, quotes, contracts and team members kept in one JSON
//! document on this device.
//!
//! ## Usage
//!
//! ```bash
//! # Seed the demo workspace and sign in as the demo user
//! freelancer demo
//!
//! # Dashboard and board of the signed-in user
//! freelancer summary
//! freelancer board
//!
//! # Drag a card to another column
//! freelancer move-task task-3 in_progress
//!
//! # Use another data directory
//! freelancer --data-dir /tmp/freelancer clients --status active
//! ```

use anyhow::Context as _;
use clap::Parser;
use freelancer_cli::config::{self, LogFormat, DEFAULT_LOG_FILTER};
use freelancer_cli::Cli;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    init_tracing(LogFormat::from_env());

    let cli = Cli::parse();
    tracing::debug!(
        "FreelancerPro CLI v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let store_config = config::store_config(&cli).context("Failed to load configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match freelancer_cli::run(cli, &store_config, &mut out) {
        Ok(()) => {
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("error: {}", e);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}

/// Logs go to stderr so stdout stays clean for command output
fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let json = format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr)))
        .init();
}
