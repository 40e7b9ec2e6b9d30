//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper renders its items with their own `Display` impl and prints a
//! single line when the collection is empty.

use std::fmt;

use crate::models::{SessionSummary, TestStep};

/// Newtype wrapper for displaying a list of session summaries.
///
/// # Examples
///
/// ```rust
/// use circuit_core::{
///     display::SessionSummaries,
///     models::{SessionProgress, SessionStatus, SessionSummary},
/// };
/// use jiff::Timestamp;
///
/// let summary = SessionSummary {
///     id: 1,
///     address: "4 Harbour Road".to_string(),
///     technician: "Ana Ruiz".to_string(),
///     status: SessionStatus::InProgress,
///     started_at: Timestamp::now(),
///     completed_at: None,
///     current_step_index: 0,
///     progress: SessionProgress {
///         total: 7,
///         completed: 2,
///         failed: 0,
///         remaining: 5,
///     },
/// };
///
/// let output = format!("{}", SessionSummaries(vec![summary]));
/// assert!(output.contains("4 Harbour Road"));
/// ```
pub struct SessionSummaries(pub Vec<SessionSummary>);

impl SessionSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SessionSummary> {
        self.0.iter()
    }
}

impl IntoIterator for SessionSummaries {
    type Item = SessionSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SessionSummaries {
    type Item = &'a SessionSummary;
    type IntoIter = std::slice::Iter<'a, SessionSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SessionSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No sessions found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying catalog steps in order, numbered from 1.
pub struct CatalogSteps<'a>(pub &'a [TestStep]);

impl CatalogSteps<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for CatalogSteps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No steps in catalog.");
        }

        for (i, step) in self.0.iter().enumerate() {
            writeln!(f, "{}. **{}** ({})", i + 1, step.title, step.id)?;
            write!(f, "   - {}, {}", step.category.label(), step.test_type)?;
            if let Some(time) = &step.estimated_time {
                write!(f, ", {time}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
