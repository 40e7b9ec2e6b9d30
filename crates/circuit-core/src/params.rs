//! Parameter structures for session operations
//!
//! Shared parameter structures used by every front end (CLI, MCP) without
//! framework-specific derives. Interface layers wrap these types and add
//! their own derives:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation is only compiled in with the `schema` feature.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    display::SessionView,
    error::{BenchError, Result},
    models::{InstallationDetails, ResultStatus, Technician},
};

/// Generic parameters for operations requiring just a session ID.
///
/// Used for next_step, previous_step and complete_session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the session to operate on
    pub id: u64,
}

/// Parameters for looking up a catalog step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepLookup {
    /// Identifier of the step (e.g. "rcd-test")
    pub step_id: String,
}

/// Parameters for starting a new guided test session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StartSession {
    /// Installation under test
    pub installation: InstallationDetails,
    /// Person carrying out the tests
    pub technician: Technician,
}

/// Parameters for showing one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowSession {
    /// The ID of the session to show
    pub id: u64,
    /// View to render: 'overview' (default), 'step' or 'results'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

impl ShowSession {
    /// The requested view, defaulting to the overview.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::InvalidInput` for an unrecognised view name.
    pub fn view(&self) -> Result<SessionView> {
        match self.view.as_deref().map(str::trim) {
            None | Some("") => Ok(SessionView::default()),
            Some(view) => view
                .parse()
                .map_err(|reason: String| BenchError::invalid_input("view").with_reason(reason)),
        }
    }
}

/// Parameters for listing sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListSessions {
    /// Show completed sessions instead of those in progress
    #[serde(default)]
    pub completed: bool,
}

/// Parameters for deleting a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteSession {
    /// The ID of the session to delete
    pub id: u64,
    /// Whether the deletion has been confirmed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for recording the outcome of a step.
///
/// The status arrives as text from the interface layers and is validated by
/// [`RecordResult::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordResult {
    /// Session the result belongs to
    pub session_id: u64,
    /// Step within that session
    pub step_id: String,
    /// Outcome: 'completed' or 'failed'
    pub status: String,
    /// Measured value (e.g. "0.42")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Unit of the measured value (e.g. "Ω", "MΩ", "ms")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Observations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RecordResult {
    /// Validate the request and produce the partial result to record.
    ///
    /// # Errors
    ///
    /// * `BenchError::InvalidInput` - When the status string is not a result
    ///   status
    /// * `BenchError::InvalidInput` - When the step id is blank
    pub fn validate(&self) -> Result<ResultEntry> {
        if self.step_id.trim().is_empty() {
            return Err(BenchError::invalid_input("step_id").with_reason("Step ID must not be blank"));
        }

        let status = ResultStatus::from_str(self.status.trim()).map_err(|_| {
            BenchError::invalid_input("status").with_reason(format!(
                "Invalid status: {}. Must be 'completed' or 'failed'",
                self.status
            ))
        })?;

        Ok(ResultEntry {
            status,
            value: non_blank(self.value.as_deref()),
            unit: non_blank(self.unit.as_deref()),
            notes: non_blank(self.notes.as_deref()),
        })
    }
}

/// A result as supplied by the operator: everything except the step id and
/// timestamp, which the controller attaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub status: ResultStatus,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ResultEntry {
    /// Entry with a status and no annotations.
    pub fn new(status: ResultStatus) -> Self {
        Self {
            status,
            value: None,
            unit: None,
            notes: None,
        }
    }

    /// Attach a measured value and its unit.
    pub fn with_measurement(mut self, value: impl Into<String>, unit: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self.unit = Some(unit.into());
        self
    }

    /// Attach observations.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
