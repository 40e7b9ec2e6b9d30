//! Progress and summary types derived from sessions.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ResultStatus, SessionRecord, SessionStatus, StepResult, TestStep};

/// Aggregated view of session progress, computed on demand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
    pub remaining: usize,
}

impl SessionProgress {
    /// Derive counters from the steps and the results recorded against them.
    ///
    /// Results whose step id is not among `steps` are ignored.
    pub fn derive(steps: &[TestStep], results: &BTreeMap<String, StepResult>) -> Self {
        let total = steps.len();
        let (completed, failed) = steps
            .iter()
            .filter_map(|step| results.get(&step.id))
            .fold((0, 0), |(completed, failed), result| match result.status {
                ResultStatus::Completed => (completed + 1, failed),
                ResultStatus::Failed => (completed, failed + 1),
            });

        Self {
            total,
            completed,
            failed,
            remaining: total - completed - failed,
        }
    }

    /// Number of steps with any recorded result.
    pub fn recorded(&self) -> usize {
        self.completed + self.failed
    }

    /// Share of passing steps, rounded to the nearest whole percent.
    pub fn percent_complete(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Summary information about a session for list views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSummary {
    /// Session ID
    pub id: u64,
    /// Installation address
    pub address: String,
    /// Technician name
    pub technician: String,
    /// Session status
    pub status: SessionStatus,
    /// Start timestamp
    pub started_at: Timestamp,
    /// Completion timestamp
    pub completed_at: Option<Timestamp>,
    /// Zero-based position of the current step
    pub current_step_index: usize,
    /// Progress counters
    pub progress: SessionProgress,
}

impl From<&SessionRecord> for SessionSummary {
    fn from(record: &SessionRecord) -> Self {
        let session = &record.session;
        Self {
            id: record.id,
            address: session.installation.address.clone(),
            technician: session.technician.name.clone(),
            status: session.status,
            started_at: session.started_at,
            completed_at: session.completed_at,
            current_step_index: session.current_step_index,
            progress: session.progress(),
        }
    }
}

impl SessionSummary {
    /// Whether any recorded result is a failure.
    pub fn has_failures(&self) -> bool {
        self.progress.failed > 0
    }
}

