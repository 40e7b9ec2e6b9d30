//! Session operations for the SessionBench.

use log::debug;
use tokio::task;

use super::SessionBench;
use crate::{
    controller::SessionController,
    db::Database,
    error::{BenchError, JoinResultExt, Result},
    models::{SessionRecord, SessionStatus, SessionSummary},
    params::{DeleteSession, Id, ListSessions, RecordResult, StartSession},
};

impl SessionBench {
    /// Starts a session over a snapshot of the bench catalog and stores it.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::InvalidInput` if the installation address or
    /// technician name is blank.
    pub async fn start_session(&self, params: &StartSession) -> Result<SessionRecord> {
        if params.installation.address.trim().is_empty() {
            return Err(BenchError::invalid_input("address")
                .with_reason("Installation address must not be blank"));
        }
        if params.technician.name.trim().is_empty() {
            return Err(BenchError::invalid_input("technician")
                .with_reason("Technician name must not be blank"));
        }

        let controller = SessionController::start(
            &self.catalog,
            params.installation.clone(),
            params.technician.clone(),
        )?;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_session(controller.into_session())
        })
        .await
        .join_context()?
    }

    /// Retrieves a session by its ID.
    pub async fn get_session(&self, params: &Id) -> Result<Option<SessionRecord>> {
        let db_path = self.db_path.clone();
        let session_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_session(session_id)
        })
        .await
        .join_context()?
    }

    /// Lists in-progress sessions, or completed ones when asked, newest first.
    pub async fn list_sessions(&self, params: &ListSessions) -> Result<Vec<SessionSummary>> {
        let db_path = self.db_path.clone();
        let status = if params.completed {
            SessionStatus::Completed
        } else {
            SessionStatus::InProgress
        };

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_sessions(status)
        })
        .await
        .join_context()?
    }

    /// Records the outcome of a step, replacing any earlier result for it.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::InvalidInput` for a bad status or blank step id,
    /// `BenchError::SessionNotFound` for an unknown session and
    /// `BenchError::UnknownStep` if the step is not part of the session.
    pub async fn record_result(&self, params: &RecordResult) -> Result<SessionRecord> {
        let entry = params.validate()?;
        let step_id = params.step_id.trim().to_string();

        self.mutate(params.session_id, move |controller| {
            controller.record_result(&step_id, entry).map(|_| ())
        })
        .await
    }

    /// Moves a session to its next step; stays put on the last step.
    pub async fn next_step(&self, params: &Id) -> Result<SessionRecord> {
        self.mutate(params.id, |controller| {
            controller.next_step();
            Ok(())
        })
        .await
    }

    /// Moves a session to its previous step; stays put on the first step.
    pub async fn previous_step(&self, params: &Id) -> Result<SessionRecord> {
        self.mutate(params.id, |controller| {
            controller.previous_step();
            Ok(())
        })
        .await
    }

    /// Marks a session completed regardless of how many steps have results.
    pub async fn complete_session(&self, params: &Id) -> Result<SessionRecord> {
        self.mutate(params.id, |controller| {
            controller.complete();
            Ok(())
        })
        .await
    }

    /// Permanently deletes a session and its results.
    ///
    /// Returns the deleted session, or `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::InvalidInput` if `confirmed` is false
    pub async fn delete_session(&self, params: &DeleteSession) -> Result<Option<SessionRecord>> {
        if !params.confirmed {
            return Err(BenchError::invalid_input("confirmed").with_reason(
                "Session deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let db_path = self.db_path.clone();
        let session_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_session(session_id)
        })
        .await
        .join_context()?
    }

    /// Loads a session, applies `op` through a controller and saves it in
    /// one blocking task.
    async fn mutate<F>(&self, id: u64, op: F) -> Result<SessionRecord>
    where
        F: FnOnce(&mut SessionController) -> Result<()> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let SessionRecord {
                id,
                version,
                updated_at,
                session,
            } = db
                .get_session(id)?
                .ok_or(BenchError::SessionNotFound { id })?;

            let mut controller = SessionController::resume(session);
            op(&mut controller)?;

            let saved = db.save_session(SessionRecord {
                id,
                version,
                updated_at,
                session: controller.into_session(),
            })?;
            debug!("Saved session {id} at version {}", saved.version);
            Ok(saved)
        })
        .await
        .join_context()?
    }
}
