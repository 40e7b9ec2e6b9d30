//! Session controller: the only code path that mutates a [`TestSession`].
//!
//! The controller owns its session exclusively. Readers get a shared
//! reference through [`SessionController::session`]; every change goes
//! through one of the five operations below, each of which runs to
//! completion synchronously and leaves the session invariants intact:
//!
//! - the current step index stays within `0..steps.len()`;
//! - at most one result exists per step, and only for steps of the session;
//! - the status only ever moves from in-progress to completed.
//!
//! ```text
//!   start ──▶ in-progress ──complete──▶ completed
//!              │  ▲
//!     next/prev│  │record_result
//!              ▼  │
//!            (index clamped to 0..=N-1)
//! ```

use std::collections::BTreeMap;

use jiff::Timestamp;
use log::{debug, warn};

use crate::{
    error::{BenchError, Result},
    models::{InstallationDetails, SessionStatus, StepResult, Technician, TestSession, TestStep},
    params::ResultEntry,
};

#[cfg(test)]
mod tests;

/// Owner of a single guided test session.
#[derive(Debug, Clone)]
pub struct SessionController {
    session: TestSession,
}

impl SessionController {
    /// Starts a new session over a snapshot of `catalog`.
    ///
    /// The steps are copied, so later changes to the caller's catalog do not
    /// reach the session.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::EmptyCatalog` if the catalog has no steps.
    pub fn start<C>(
        catalog: &C,
        installation: InstallationDetails,
        technician: Technician,
    ) -> Result<Self>
    where
        C: AsRef<[TestStep]> + ?Sized,
    {
        let steps = catalog.as_ref();
        if steps.is_empty() {
            return Err(BenchError::EmptyCatalog);
        }

        debug!(
            "Starting session at '{}' with {} steps",
            installation.address,
            steps.len()
        );

        Ok(Self {
            session: TestSession {
                steps: steps.to_vec(),
                current_step_index: 0,
                results: BTreeMap::new(),
                status: SessionStatus::InProgress,
                installation,
                technician,
                started_at: Timestamp::now(),
                completed_at: None,
            },
        })
    }

    /// Takes ownership of an existing session, e.g. one loaded from storage.
    pub fn resume(session: TestSession) -> Self {
        Self { session }
    }

    /// Read-only view of the owned session.
    pub fn session(&self) -> &TestSession {
        &self.session
    }

    /// Gives the session back, ending the controller's ownership.
    pub fn into_session(self) -> TestSession {
        self.session
    }

    /// Records the outcome of `step_id`, replacing any earlier result for it.
    ///
    /// The timestamp is taken here, not from the caller. The current step
    /// index is left where it is.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::UnknownStep` if `step_id` is not a step of this
    /// session; the session is left unchanged.
    pub fn record_result(&mut self, step_id: &str, entry: ResultEntry) -> Result<&TestSession> {
        if !self.session.contains_step(step_id) {
            warn!("Rejected result for step '{step_id}' which is not part of the session");
            return Err(BenchError::unknown_step(step_id));
        }

        let result = StepResult {
            step_id: step_id.to_string(),
            status: entry.status,
            value: entry.value,
            unit: entry.unit,
            notes: entry.notes,
            timestamp: Timestamp::now(),
        };

        if let Some(previous) = self.session.results.insert(step_id.to_string(), result) {
            debug!(
                "Replaced {} result for step '{step_id}'",
                previous.status.as_str()
            );
        } else {
            debug!("Recorded result for step '{step_id}'");
        }

        Ok(&self.session)
    }

    /// Moves to the next step; does nothing on the last step.
    pub fn next_step(&mut self) -> &TestSession {
        let last = self.session.steps.len() - 1;
        if self.session.current_step_index < last {
            self.session.current_step_index += 1;
        }
        debug!("Current step index: {}", self.session.current_step_index);
        &self.session
    }

    /// Moves to the previous step; does nothing on the first step.
    pub fn previous_step(&mut self) -> &TestSession {
        if self.session.current_step_index > 0 {
            self.session.current_step_index -= 1;
        }
        debug!("Current step index: {}", self.session.current_step_index);
        &self.session
    }

    /// Marks the session completed, whatever results have been recorded.
    ///
    /// Completing an already completed session keeps the original
    /// completion time.
    pub fn complete(&mut self) -> &TestSession {
        if self.session.status != SessionStatus::Completed {
            self.session.status = SessionStatus::Completed;
            self.session.completed_at = Some(Timestamp::now());
            let progress = self.session.progress();
            debug!(
                "Session completed with {} passed, {} failed, {} pending",
                progress.completed, progress.failed, progress.remaining
            );
        }
        &self.session
    }
}

impl AsRef<TestSession> for SessionController {
    fn as_ref(&self) -> &TestSession {
        &self.session
    }
}
