//! SQLite storage for test sessions and their results.
//!
//! A [`Database`] wraps one connection. Sessions are stored with JSON
//! snapshots of their steps and metadata; results live in their own table
//! keyed by `(session_id, step_id)` so recording again is an upsert.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod result_queries;
pub mod session_queries;
mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database at `path` and applies the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
