//! Session CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::utils::{id_at, json_at, optional_timestamp_at, parsed_at, timestamp_at};
use crate::{
    error::{BenchError, DatabaseResultExt, Result},
    models::{
        InstallationDetails, SessionRecord, SessionStatus, SessionSummary, Technician,
        TestSession, TestStep,
    },
};

const INSERT_SESSION_SQL: &str = "INSERT INTO sessions (status, current_step_index, installation, technician, steps, version, created_at, updated_at, completed_at) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?7, ?8)";
const SESSION_COLUMNS: &str = "id, version, status, current_step_index, installation, technician, steps, created_at, updated_at, completed_at";
const CHECK_SESSION_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM sessions WHERE id = ?1)";
const UPDATE_SESSION_SQL: &str = "UPDATE sessions SET status = ?1, current_step_index = ?2, completed_at = ?3, updated_at = ?4, version = version + 1 WHERE id = ?5 AND version = ?6";
const DELETE_SESSION_SQL: &str = "DELETE FROM sessions WHERE id = ?1";

/// Columns of a `sessions` row, before results are attached.
struct SessionRow {
    id: u64,
    version: u64,
    status: SessionStatus,
    current_step_index: usize,
    installation: InstallationDetails,
    technician: Technician,
    steps: Vec<TestStep>,
    started_at: Timestamp,
    updated_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl SessionRow {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: id_at(row, 0)?,
            version: id_at(row, 1)?,
            status: parsed_at(row, 2)?,
            current_step_index: row.get::<_, i64>(3)? as usize,
            installation: json_at(row, 4)?,
            technician: json_at(row, 5)?,
            steps: json_at(row, 6)?,
            started_at: timestamp_at(row, 7)?,
            updated_at: timestamp_at(row, 8)?,
            completed_at: optional_timestamp_at(row, 9)?,
        })
    }

    /// Attaches results and validates the whole session.
    fn into_record(self, conn: &Connection) -> Result<SessionRecord> {
        let results = super::Database::load_results(conn, self.id)?;
        let session = TestSession::from_persisted(
            self.steps,
            self.current_step_index,
            results,
            self.status,
            self.installation,
            self.technician,
            self.started_at,
            self.completed_at,
        )?;

        Ok(SessionRecord {
            id: self.id,
            version: self.version,
            updated_at: self.updated_at,
            session,
        })
    }
}

impl super::Database {
    /// Stores a freshly started session and returns it with its new id at
    /// version 1.
    pub fn insert_session(&mut self, session: TestSession) -> Result<SessionRecord> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_SESSION_SQL,
            params![
                session.status().as_str(),
                session.current_step_index() as i64,
                serde_json::to_string(session.installation())?,
                serde_json::to_string(session.technician())?,
                serde_json::to_string(session.steps())?,
                session.started_at().to_string(),
                &now_str,
                session.completed_at().map(|t| t.to_string()),
            ],
        )
        .db_context("Failed to insert session")?;

        let id = tx.last_insert_rowid() as u64;
        Self::store_results(&tx, id, session.results().values())?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Inserted session {id}");

        Ok(SessionRecord {
            id,
            version: 1,
            updated_at: now,
            session,
        })
    }

    /// Retrieves a session with its results by ID.
    pub fn get_session(&self, id: u64) -> Result<Option<SessionRecord>> {
        Self::load_session(&self.connection, id)
    }

    fn load_session(conn: &Connection, id: u64) -> Result<Option<SessionRecord>> {
        let row = conn
            .query_row(
                &format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE id = ?1"),
                params![id as i64],
                SessionRow::from_row,
            )
            .optional()
            .db_context("Failed to query session")?;

        row.map(|row| row.into_record(conn)).transpose()
    }

    /// Lists sessions with the given status, newest first.
    pub fn list_sessions(&self, status: SessionStatus) -> Result<Vec<SessionSummary>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {SESSION_COLUMNS} FROM sessions WHERE status = ?1 ORDER BY id DESC"
            ))
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![status.as_str()], SessionRow::from_row)
            .db_context("Failed to query sessions")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read session row")?;

        rows.into_iter()
            .map(|row| {
                row.into_record(&self.connection)
                    .map(|record| SessionSummary::from(&record))
            })
            .collect()
    }

    /// Writes back a session that was loaded at `record.version`.
    ///
    /// Steps and metadata are fixed at insert time; only the status, current
    /// step index, completion time and results are written.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::SessionNotFound` if the session no longer exists
    /// and `BenchError::VersionConflict` if it was saved by someone else
    /// since it was loaded.
    pub fn save_session(&mut self, record: SessionRecord) -> Result<SessionRecord> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let session = &record.session;

        let changed = tx
            .execute(
                UPDATE_SESSION_SQL,
                params![
                    session.status().as_str(),
                    session.current_step_index() as i64,
                    session.completed_at().map(|t| t.to_string()),
                    now.to_string(),
                    record.id as i64,
                    record.version as i64,
                ],
            )
            .db_context("Failed to update session")?;

        if changed == 0 {
            let exists: bool = tx
                .query_row(CHECK_SESSION_EXISTS_SQL, params![record.id as i64], |row| {
                    row.get(0)
                })
                .db_context("Failed to check session existence")?;

            return Err(if exists {
                BenchError::VersionConflict {
                    id: record.id,
                    expected: record.version,
                }
            } else {
                BenchError::SessionNotFound { id: record.id }
            });
        }

        Self::store_results(&tx, record.id, session.results().values())?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(SessionRecord {
            version: record.version + 1,
            updated_at: now,
            ..record
        })
    }

    /// Deletes a session and its results, returning what was removed.
    pub fn delete_session(&mut self, id: u64) -> Result<Option<SessionRecord>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(record) = Self::load_session(&tx, id)? else {
            return Ok(None);
        };

        tx.execute(DELETE_SESSION_SQL, params![id as i64])
            .db_context("Failed to delete session")?;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted session {id}");

        Ok(Some(record))
    }
}
