//! Step result storage.
//!
//! One row per `(session_id, step_id)`. Writing a result for a step that
//! already has one replaces it in place.

use rusqlite::{params, Connection};

use super::utils::{parsed_at, timestamp_at};
use crate::{
    error::{DatabaseResultExt, Result},
    models::StepResult,
};

const UPSERT_RESULT_SQL: &str = "INSERT INTO results (session_id, step_id, status, value, unit, notes, recorded_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
     ON CONFLICT(session_id, step_id) DO UPDATE SET status = excluded.status, value = excluded.value, unit = excluded.unit, notes = excluded.notes, recorded_at = excluded.recorded_at";
const SELECT_RESULTS_SQL: &str = "SELECT step_id, status, value, unit, notes, recorded_at FROM results WHERE session_id = ?1 ORDER BY recorded_at, step_id";
const DELETE_STALE_RESULT_SQL: &str = "DELETE FROM results WHERE session_id = ?1 AND step_id = ?2";

impl super::Database {
    fn build_result_from_row(row: &rusqlite::Row) -> rusqlite::Result<StepResult> {
        Ok(StepResult {
            step_id: row.get(0)?,
            status: parsed_at(row, 1)?,
            value: row.get(2)?,
            unit: row.get(3)?,
            notes: row.get(4)?,
            timestamp: timestamp_at(row, 5)?,
        })
    }

    /// Results recorded for a session, oldest first.
    pub(super) fn load_results(conn: &Connection, session_id: u64) -> Result<Vec<StepResult>> {
        let mut stmt = conn
            .prepare(SELECT_RESULTS_SQL)
            .db_context("Failed to prepare results query")?;

        let results = stmt
            .query_map(params![session_id as i64], Self::build_result_from_row)
            .db_context("Failed to query results")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read result row")?;

        Ok(results)
    }

    /// Makes the stored results of a session match `results` exactly.
    pub(super) fn store_results<'a, I>(conn: &Connection, session_id: u64, results: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a StepResult>,
    {
        let stored: Vec<String> = Self::load_results(conn, session_id)?
            .into_iter()
            .map(|r| r.step_id)
            .collect();
        let mut kept = Vec::new();

        for result in results {
            conn.execute(
                UPSERT_RESULT_SQL,
                params![
                    session_id as i64,
                    &result.step_id,
                    result.status.as_str(),
                    result.value.as_deref(),
                    result.unit.as_deref(),
                    result.notes.as_deref(),
                    result.timestamp.to_string(),
                ],
            )
            .db_context("Failed to upsert result")?;
            kept.push(result.step_id.as_str());
        }

        for step_id in stored.iter().filter(|id| !kept.contains(&id.as_str())) {
            conn.execute(DELETE_STALE_RESULT_SQL, params![session_id as i64, step_id])
                .db_context("Failed to delete stale result")?;
        }

        Ok(())
    }
}
