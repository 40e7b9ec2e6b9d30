//! Step result model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ResultStatus;

/// Outcome recorded against a single step within a session.
///
/// At most one result exists per step; recording again replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
    /// Step the result belongs to
    pub step_id: String,

    /// Pass or fail
    pub status: ResultStatus,

    /// Measured value as entered by the operator (e.g. "0.42")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Unit of the measured value (e.g. "Ω", "MΩ", "ms")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Free-form observations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the controller recorded the result (UTC)
    pub timestamp: Timestamp,
}

impl StepResult {
    /// Measured value with its unit, when a value was recorded.
    pub fn measurement(&self) -> Option<String> {
        self.value.as_ref().map(|value| match &self.unit {
            Some(unit) => format!("{value} {unit}"),
            None => value.clone(),
        })
    }
}
