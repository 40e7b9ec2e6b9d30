//! Session model definition and related functionality.

use std::collections::BTreeMap;

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ResultStatus, SessionProgress, SessionStatus, StepResult, TestStep};
use crate::error::{BenchError, Result};

/// Installation the session is testing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct InstallationDetails {
    /// Address or location of the installation
    pub address: String,
    /// Client or duty holder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// Extent of the work (e.g. "Consumer unit change, 8 circuits")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Person carrying out the tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Technician {
    /// Full name
    pub name: String,
    /// Competent person scheme or registration number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
}

/// One run through an ordered sequence of steps by one technician.
///
/// Fields are only mutable through
/// [`SessionController`](crate::controller::SessionController), which keeps
/// `current_step_index` inside `0..steps.len()`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestSession {
    pub(crate) steps: Vec<TestStep>,
    pub(crate) current_step_index: usize,
    pub(crate) results: BTreeMap<String, StepResult>,
    pub(crate) status: SessionStatus,
    pub(crate) installation: InstallationDetails,
    pub(crate) technician: Technician,
    pub(crate) started_at: Timestamp,
    pub(crate) completed_at: Option<Timestamp>,
}

impl TestSession {
    /// Rehydrate a session from persisted parts.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::EmptyCatalog` if `steps` is empty,
    /// `BenchError::InvalidInput` if the index is out of range and
    /// `BenchError::UnknownStep` if a result references a foreign step.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persisted(
        steps: Vec<TestStep>,
        current_step_index: usize,
        results: Vec<StepResult>,
        status: SessionStatus,
        installation: InstallationDetails,
        technician: Technician,
        started_at: Timestamp,
        completed_at: Option<Timestamp>,
    ) -> Result<Self> {
        if steps.is_empty() {
            return Err(BenchError::EmptyCatalog);
        }
        if current_step_index >= steps.len() {
            return Err(BenchError::invalid_input("current_step_index").with_reason(format!(
                "Index {current_step_index} is out of range for {} steps",
                steps.len()
            )));
        }

        let mut by_step = BTreeMap::new();
        for result in results {
            if !steps.iter().any(|step| step.id == result.step_id) {
                return Err(BenchError::unknown_step(result.step_id));
            }
            by_step.insert(result.step_id.clone(), result);
        }

        Ok(Self {
            steps,
            current_step_index,
            results: by_step,
            status,
            installation,
            technician,
            started_at,
            completed_at,
        })
    }

    /// Steps this session walks, in order.
    pub fn steps(&self) -> &[TestStep] {
        &self.steps
    }

    /// Zero-based position of the current step.
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// The step the operator is looking at.
    pub fn current_step(&self) -> &TestStep {
        &self.steps[self.current_step_index]
    }

    /// Looks up a step of this session by id.
    pub fn step(&self, step_id: &str) -> Option<&TestStep> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    /// Whether `step_id` belongs to this session.
    pub fn contains_step(&self, step_id: &str) -> bool {
        self.step(step_id).is_some()
    }

    /// Recorded results keyed by step id.
    pub fn results(&self) -> &BTreeMap<String, StepResult> {
        &self.results
    }

    /// Recorded result for a step, if any.
    pub fn result_for(&self, step_id: &str) -> Option<&StepResult> {
        self.results.get(step_id)
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    pub fn installation(&self) -> &InstallationDetails {
        &self.installation
    }

    pub fn technician(&self) -> &Technician {
        &self.technician
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    /// Number of steps with a passing result.
    pub fn completed_steps(&self) -> usize {
        count_with_status(&self.results, ResultStatus::Completed)
    }

    /// Number of steps with a failing result.
    pub fn failed_steps(&self) -> usize {
        count_with_status(&self.results, ResultStatus::Failed)
    }

    /// Number of steps with no result yet.
    pub fn remaining_steps(&self) -> usize {
        self.steps.len() - self.completed_steps() - self.failed_steps()
    }

    /// Derived progress counters.
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::derive(&self.steps, &self.results)
    }
}

pub(crate) fn count_with_status(
    results: &BTreeMap<String, StepResult>,
    status: ResultStatus,
) -> usize {
    results.values().filter(|r| r.status == status).count()
}

/// A persisted session with its storage identity.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionRecord {
    /// Database identifier
    pub id: u64,

    /// Optimistic concurrency version, incremented on every save
    pub version: u64,

    /// Timestamp of the last save (UTC)
    pub updated_at: Timestamp,

    /// The session itself
    #[serde(flatten)]
    pub session: TestSession,
}
