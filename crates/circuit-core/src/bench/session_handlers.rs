//! Session handlers that return formatted wrapper types for the SessionBench.
//!
//! Both front ends print exactly what these return, so the command line and
//! the tool server agree on wording.

use super::SessionBench;
use crate::{
    display::{CreateResult, DeleteResult, SessionSummaries, UpdateResult},
    error::Result,
    models::{SessionRecord, TestSession},
    params::{DeleteSession, Id, ListSessions, RecordResult, ShowSession, StartSession},
};

fn position(session: &TestSession) -> String {
    let step = session.current_step();
    format!(
        "Current step: {} of {} ({})",
        session.current_step_index() + 1,
        session.steps().len(),
        step.title
    )
}

impl SessionBench {
    /// Handle starting a session, returning a creation confirmation.
    pub async fn start_session_result(
        &self,
        params: &StartSession,
    ) -> Result<CreateResult<SessionRecord>> {
        self.start_session(params).await.map(CreateResult::new)
    }

    /// Handle showing a session in the requested view.
    ///
    /// Returns `None` if the session doesn't exist.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use circuit_core::{params::ShowSession, SessionBenchBuilder};
    /// # async {
    /// let bench = SessionBenchBuilder::new().build().await?;
    /// let params = ShowSession { id: 1, view: Some("results".to_string()) };
    /// if let Some(markdown) = bench.show_session(&params).await? {
    ///     println!("{markdown}");
    /// }
    /// # Result::<(), circuit_core::BenchError>::Ok(())
    /// # };
    /// ```
    pub async fn show_session(&self, params: &ShowSession) -> Result<Option<String>> {
        let view = params.view()?;
        let record = self.get_session(&Id { id: params.id }).await?;
        Ok(record.map(|record| view.render(&record)))
    }

    /// Handle listing sessions as display summaries.
    pub async fn list_sessions_summary(&self, params: &ListSessions) -> Result<SessionSummaries> {
        self.list_sessions(params).await.map(SessionSummaries)
    }

    /// Handle recording a result, listing what was recorded.
    pub async fn record_result_update(
        &self,
        params: &RecordResult,
    ) -> Result<UpdateResult<SessionRecord>> {
        let record = self.record_result(params).await?;

        let mut changes = Vec::new();
        let step_id = params.step_id.trim();
        if let (Some(step), Some(result)) = (
            record.session.step(step_id),
            record.session.result_for(step_id),
        ) {
            let mut change = format!("Recorded '{}' as {}", step.title, result.status);
            if let Some(measurement) = result.measurement() {
                change.push_str(&format!(" ({measurement})"));
            }
            changes.push(change);
        }

        Ok(UpdateResult::with_changes(record, changes))
    }

    /// Handle moving to the next step.
    pub async fn next_step_update(&self, params: &Id) -> Result<UpdateResult<SessionRecord>> {
        let record = self.next_step(params).await?;
        let change = position(&record.session);
        Ok(UpdateResult::with_changes(record, vec![change]))
    }

    /// Handle moving to the previous step.
    pub async fn previous_step_update(&self, params: &Id) -> Result<UpdateResult<SessionRecord>> {
        let record = self.previous_step(params).await?;
        let change = position(&record.session);
        Ok(UpdateResult::with_changes(record, vec![change]))
    }

    /// Handle completing a session, summarising the outcome.
    pub async fn complete_session_update(
        &self,
        params: &Id,
    ) -> Result<UpdateResult<SessionRecord>> {
        let record = self.complete_session(params).await?;
        let progress = record.session.progress();
        let change = format!(
            "Session completed: {} passed, {} failed, {} not tested",
            progress.completed, progress.failed, progress.remaining
        );
        Ok(UpdateResult::with_changes(record, vec![change]))
    }

    /// Handle deleting a session, returning what was removed.
    pub async fn delete_session_result(
        &self,
        params: &DeleteSession,
    ) -> Result<Option<DeleteResult<SessionRecord>>> {
        Ok(self.delete_session(params).await?.map(DeleteResult::new))
    }
}
