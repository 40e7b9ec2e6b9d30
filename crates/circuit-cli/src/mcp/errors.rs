//! Error handling utilities for MCP server

use circuit_core::BenchError;
use rmcp::ErrorData;

/// Convert a bench error into an MCP error.
///
/// Mistakes in the request (unknown step, bad status, missing session) are
/// reported as invalid parameters so the client can correct the call.
pub fn to_mcp_error(message: &str, error: &BenchError) -> ErrorData {
    let message = format!("{message}: {error}");
    if error.is_caller_error() {
        ErrorData::invalid_params(message, None)
    } else {
        ErrorData::internal_error(message, None)
    }
}
