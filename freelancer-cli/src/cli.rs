//! Command-line arguments

use clap::{Parser, Subcommand};
use freelancer_shared::models::client::ClientStatus;
use freelancer_shared::models::task::TaskStatus;
use freelancer_shared::store::LoadPolicy;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "freelancer")]
#[command(author, version, about = "FreelancerPro business dashboard on local storage")]
pub struct Cli {
    /// Directory holding the stored documents (overrides FREELANCER_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// How a corrupt document is treated: lenient or strict
    #[arg(long, global = true, value_name = "POLICY")]
    pub load_policy: Option<LoadPolicy>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace all data with the demo workspace and sign in as the demo user
    Demo,

    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        password: String,
    },

    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show the dashboard summary
    Summary,

    /// List clients
    Clients {
        /// Case-insensitive match on name, email or company
        #[arg(short, long)]
        query: Option<String>,

        /// prospect, active or inactive
        #[arg(short, long)]
        status: Option<ClientStatus>,
    },

    /// Show the Kanban board
    Board,

    /// Move a task to another board column
    MoveTask {
        /// Task id
        id: String,

        /// pending, in_progress, completed or cancelled
        status: TaskStatus,
    },
}
