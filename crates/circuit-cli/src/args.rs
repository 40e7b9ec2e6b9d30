use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogCommands, SessionCommands};

/// Guided electrical circuit testing
///
/// Walks a technician through an ordered sequence of test steps (safe
/// isolation, continuity, insulation resistance, polarity, earth fault loop
/// impedance, RCD and functional tests), recording a pass or fail result with
/// optional measurements for each. Sessions are stored locally and can also
/// be driven through an MCP server on stdio.
#[derive(Parser)]
#[command(version, about, name = "circuit")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/circuit/sessions.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// JSON file with the step catalog to use instead of the built-in flow
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Without a command, sessions still in progress are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the step catalog
    #[command(alias = "c")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Run and review test sessions
    #[command(alias = "s")]
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Start the MCP server
    Serve,
}
