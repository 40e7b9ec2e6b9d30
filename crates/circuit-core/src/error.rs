//! Error types for the circuit test library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all session operations.
#[derive(Error, Debug)]
pub enum BenchError {
    /// The step catalog has no steps, so no session can point at one
    #[error("Step catalog is empty; a session needs at least one step")]
    EmptyCatalog,
    /// A result was recorded against a step that is not part of the session
    #[error("Step '{step_id}' is not part of this session")]
    UnknownStep { step_id: String },
    /// Session not found for the given ID
    #[error("Session with ID {id} not found")]
    SessionNotFound { id: u64 },
    /// The stored session changed since it was loaded
    #[error("Session {id} was modified concurrently (expected version {expected})")]
    VersionConflict { id: u64, expected: u64 },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> BenchError {
        BenchError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BenchError {
        BenchError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BenchError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an unknown-step error for the offending id.
    pub fn unknown_step(step_id: impl Into<String>) -> Self {
        Self::UnknownStep {
            step_id: step_id.into(),
        }
    }

    /// True when the error points at caller misuse rather than the
    /// environment (storage, filesystem).
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyCatalog
                | Self::UnknownStep { .. }
                | Self::SessionNotFound { .. }
                | Self::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BenchError::database(message).with_source(e))
    }
}

/// Extension trait for mapping tokio join failures from blocking tasks.
pub trait JoinResultExt<T> {
    /// Map a join error into a configuration error.
    fn join_context(self) -> Result<T>;
}

impl<T> JoinResultExt<T> for std::result::Result<T, tokio::task::JoinError> {
    fn join_context(self) -> Result<T> {
        self.map_err(|e| BenchError::Configuration {
            message: format!("Task join error: {e}"),
        })
    }
}

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, BenchError>;
