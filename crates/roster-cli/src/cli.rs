//! Command-line surface of the roster tool.

use clap::{Parser, Subcommand};

/// Club membership directory tool.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Work a Roster directory service from the terminal")]
pub struct Args {
    /// Base URL of the directory service
    #[arg(long, env = "ROSTER_API", default_value = "http://127.0.0.1:5000")]
    pub api: String,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// The operations the tool offers.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every member
    List,
    /// Add a member
    Add {
        /// Display name
        name: String,
        /// Role in the club
        role: String,
    },
    /// Change an existing member's name and/or role
    Update {
        /// Id of the member to change
        id: i64,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New role
        #[arg(long)]
        role: Option<String>,
    },
    /// Remove a member
    Remove {
        /// Id of the member to remove
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Check the service is up and how many records it holds
    Status,
}
