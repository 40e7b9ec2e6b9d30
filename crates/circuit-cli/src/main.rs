//! Circuit CLI Application
//!
//! Command-line runner for guided circuit test sessions, and the entry point
//! of the stdio MCP server.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use circuit_core::{params::ListSessions, Catalog, SessionBenchBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, CircuitMcpServer};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let mut builder = SessionBenchBuilder::new();
    if let Some(path) = database_file {
        builder = builder.with_database_path(path);
    }
    if let Some(path) = catalog_file {
        let catalog = Catalog::from_json_file(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
        builder = builder.with_catalog(catalog);
    }

    let bench = builder
        .build()
        .await
        .context("Failed to initialize session bench")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Circuit started");

    match command {
        Some(Commands::Catalog { command }) => {
            Cli::new(bench, renderer).handle_catalog_command(command)
        }
        Some(Commands::Session { command }) => {
            Cli::new(bench, renderer)
                .handle_session_command(command)
                .await
        }
        Some(Commands::Serve) => {
            info!("Starting Circuit MCP server");
            run_stdio_server(CircuitMcpServer::new(bench))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(bench, renderer)
                .list_sessions(&ListSessions { completed: false })
                .await
        }
    }
}
