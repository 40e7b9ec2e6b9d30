//! MCP tool handlers implementation

use std::sync::Arc;

use circuit_core::{
    display::{CatalogSteps, OperationStatus},
    params as core, SessionBench,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types derive JsonSchema only behind the `schema` feature.
// The transparent wrapper passes deserialization and schema generation
// straight through to them so tool signatures can name a single type.

/// MCP wrapper for core parameter types.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type StartSession = McpParams<core::StartSession>;
pub type ShowSession = McpParams<core::ShowSession>;
pub type ListSessions = McpParams<core::ListSessions>;
pub type RecordResult = McpParams<core::RecordResult>;
pub type DeleteSession = McpParams<core::DeleteSession>;
pub type StepLookup = McpParams<core::StepLookup>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(output)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    bench: Arc<Mutex<SessionBench>>,
}

impl McpHandlers {
    pub fn new(bench: Arc<Mutex<SessionBench>>) -> Self {
        Self { bench }
    }

    pub async fn start_session(&self, Parameters(params): Parameters<StartSession>) -> McpResult {
        debug!("start_session: {:?}", params);

        let result = self
            .bench
            .lock()
            .await
            .start_session_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to start session", &e))?;

        text(result.to_string())
    }

    pub async fn list_sessions(&self, Parameters(params): Parameters<ListSessions>) -> McpResult {
        debug!("list_sessions: {:?}", params);

        let inner_params = params.as_ref();
        let summaries = self
            .bench
            .lock()
            .await
            .list_sessions_summary(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list sessions", &e))?;

        let title = if summaries.is_empty() {
            if inner_params.completed {
                "No completed sessions found"
            } else {
                "No sessions in progress"
            }
        } else if inner_params.completed {
            "Completed Sessions"
        } else {
            "Sessions In Progress"
        };

        text(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_session(&self, Parameters(params): Parameters<ShowSession>) -> McpResult {
        debug!("show_session: {:?}", params);

        let output = self
            .bench
            .lock()
            .await
            .show_session(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show session", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Session with ID {} not found", params.as_ref().id),
                    None,
                )
            })?;

        text(output)
    }

    pub async fn record_result(&self, Parameters(params): Parameters<RecordResult>) -> McpResult {
        debug!("record_result: {:?}", params);

        let result = self
            .bench
            .lock()
            .await
            .record_result_update(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to record result", &e))?;

        text(result.to_string())
    }

    pub async fn next_step(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("next_step: {:?}", params);

        let result = self
            .bench
            .lock()
            .await
            .next_step_update(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to move to next step", &e))?;

        text(result.to_string())
    }

    pub async fn previous_step(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("previous_step: {:?}", params);

        let result = self
            .bench
            .lock()
            .await
            .previous_step_update(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to move to previous step", &e))?;

        text(result.to_string())
    }

    pub async fn complete_session(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("complete_session: {:?}", params);

        let result = self
            .bench
            .lock()
            .await
            .complete_session_update(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to complete session", &e))?;

        text(result.to_string())
    }

    pub async fn delete_session(&self, Parameters(params): Parameters<DeleteSession>) -> McpResult {
        debug!("delete_session: {:?}", params);

        let inner_params = params.as_ref();
        let deleted = self
            .bench
            .lock()
            .await
            .delete_session_result(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete session", &e))?;

        match deleted {
            Some(result) => text(result.to_string()),
            None => text(
                OperationStatus::failure(format!("Session with ID {} not found", inner_params.id))
                    .to_string(),
            ),
        }
    }

    pub async fn list_catalog(&self) -> McpResult {
        debug!("list_catalog");

        let bench = self.bench.lock().await;
        text(format!(
            "# Step Catalog\n\n{}",
            CatalogSteps(bench.catalog().steps())
        ))
    }

    pub async fn show_catalog_step(&self, Parameters(params): Parameters<StepLookup>) -> McpResult {
        debug!("show_catalog_step: {:?}", params);

        let step_id = &params.as_ref().step_id;
        let bench = self.bench.lock().await;
        let step = bench.catalog().get(step_id).ok_or_else(|| {
            ErrorData::invalid_params(format!("Step '{step_id}' not found in catalog"), None)
        })?;

        text(step.to_string())
    }
}
