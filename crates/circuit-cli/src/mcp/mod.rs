//! MCP server for guided circuit testing
//!
//! Exposes the session workflow as Model Context Protocol tools so an
//! assistant can walk a technician through the test sequence.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use circuit_core::SessionBench;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    DeleteSession, Id, ListSessions, McpResult, RecordResult, ShowSession, StartSession,
    StepLookup,
};

const INSTRUCTIONS: &str = r#"Circuit guides a technician through an ordered sequence of electrical installation tests and records the outcome of each.

## Core Concepts
- **Catalog**: the fixed, ordered list of test steps every session walks (safe isolation, continuity, insulation resistance, polarity, earth fault loop impedance, RCD, functional testing)
- **Session**: one run through the catalog for an installation, with a current step pointer and at most one result per step
- **Result**: 'completed' (pass) or 'failed', with an optional measured value, unit and notes

## Typical Workflow
1. `start_session` with the installation address and technician name
2. `show_session` with view='step' to read the instructions for the current step
3. `record_result` for that step, including the measurement when one was taken
4. `next_step` to advance; `previous_step` to go back and correct an entry
5. `complete_session` when done, then `show_session` with view='results' for the report

## Notes
- Navigation is clamped: moving past the first or last step leaves the pointer where it is
- Recording a result for a step that already has one replaces it
- Results can be recorded for any catalog step, not only the current one
- Steps without a result count as 'not tested' in the final summary

## Tool Categories
- **Sessions**: start_session, list_sessions, show_session, delete_session
- **Testing**: record_result, next_step, previous_step, complete_session
- **Catalog**: list_catalog, show_catalog_step"#;

/// MCP server wrapping a [`SessionBench`]
#[derive(Clone)]
pub struct CircuitMcpServer {
    bench: Arc<Mutex<SessionBench>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CircuitMcpServer {
    pub fn new(bench: SessionBench) -> Self {
        Self {
            bench: Arc::new(Mutex::new(bench)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.bench.clone())
    }

    #[tool(
        name = "start_session",
        description = "Start a new guided test session for an installation. Requires installation.address and technician.name; installation.client, installation.description and technician.registration are optional. The session begins at the first catalog step with no results. Returns the new session ID."
    )]
    async fn start_session(&self, params: Parameters<StartSession>) -> McpResult {
        self.handlers().start_session(params).await
    }

    #[tool(
        name = "list_sessions",
        description = "List test sessions, newest first. Use completed=false (default) for sessions still in progress, or completed=true for finished ones. Each entry shows the address, technician and pass/fail counts."
    )]
    async fn list_sessions(&self, params: Parameters<ListSessions>) -> McpResult {
        self.handlers().list_sessions(params).await
    }

    #[tool(
        name = "show_session",
        description = "Show a session. view='overview' (default) lists every step with its result and marks the current one; view='step' shows the full instructions for the current step; view='results' reports recorded and pending results."
    )]
    async fn show_session(&self, params: Parameters<ShowSession>) -> McpResult {
        self.handlers().show_session(params).await
    }

    #[tool(
        name = "record_result",
        description = "Record the outcome of a step. status must be 'completed' (pass) or 'failed'. Optionally include value and unit of the measurement (e.g. value='0.42', unit='Ω') and notes. Replaces any earlier result for the same step. Does not move the current step."
    )]
    async fn record_result(&self, params: Parameters<RecordResult>) -> McpResult {
        self.handlers().record_result(params).await
    }

    #[tool(
        name = "next_step",
        description = "Move the session to the next step in the catalog. Stays on the last step if already there."
    )]
    async fn next_step(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().next_step(params).await
    }

    #[tool(
        name = "previous_step",
        description = "Move the session back to the previous step. Stays on the first step if already there."
    )]
    async fn previous_step(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().previous_step(params).await
    }

    #[tool(
        name = "complete_session",
        description = "Mark the session completed and report how many steps passed, failed or were not tested. Steps without a result are reported as not tested. Calling it again keeps the original completion time."
    )]
    async fn complete_session(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().complete_session(params).await
    }

    #[tool(
        name = "delete_session",
        description = "Permanently delete a session and all its results. Requires confirmed=true. This cannot be undone."
    )]
    async fn delete_session(&self, params: Parameters<DeleteSession>) -> McpResult {
        self.handlers().delete_session(params).await
    }

    #[tool(
        name = "list_catalog",
        description = "List the ordered test steps every session walks through, with their identifiers, categories and test types."
    )]
    async fn list_catalog(&self) -> McpResult {
        self.handlers().list_catalog().await
    }

    #[tool(
        name = "show_catalog_step",
        description = "Show one catalog step in full: category, test type, estimated time, description, numbered instructions, safety warnings and required equipment."
    )]
    async fn show_catalog_step(&self, params: Parameters<StepLookup>) -> McpResult {
        self.handlers().show_catalog_step(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CircuitMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "circuit".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CircuitMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Circuit MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
