//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper prints a one-line confirmation followed by the session
//! overview, so callers always see where the session stands after a change.

use std::fmt;

use crate::models::SessionRecord;

/// Wrapper type for displaying a newly started session.
///
/// # Examples
///
/// ```rust
/// use circuit_core::{
///     controller::SessionController,
///     display::CreateResult,
///     models::{InstallationDetails, SessionRecord, Technician},
///     Catalog,
/// };
/// use jiff::Timestamp;
///
/// let controller = SessionController::start(
///     &Catalog::builtin(),
///     InstallationDetails {
///         address: "9 Quay Street".to_string(),
///         ..Default::default()
///     },
///     Technician::default(),
/// )
/// .unwrap();
/// let record = SessionRecord {
///     id: 3,
///     version: 1,
///     updated_at: Timestamp::now(),
///     session: controller.into_session(),
/// };
///
/// let output = format!("{}", CreateResult::new(record));
/// assert!(output.starts_with("Started session with ID: 3"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<SessionRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Started session with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a session mutation.
///
/// The list of changes is printed ahead of the resource when non-empty.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<SessionRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated session with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a deleted session.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<SessionRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted session at '{}' (ID: {})",
            self.resource.session.installation().address,
            self.resource.id
        )
    }
}
