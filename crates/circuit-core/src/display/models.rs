//! Display implementations for domain models.
//!
//! All output is markdown so the terminal renderer and the MCP server can
//! share it unchanged.

use std::fmt;

use super::{datetime::LocalDateTime, views::Overview};
use crate::models::{
    ResultStatus, SessionRecord, SessionStatus, SessionSummary, StepResult, TestCategory,
    TestStep,
};

/// Icon for a step that has no result yet.
pub const PENDING_ICON: &str = "○";

impl fmt::Display for TestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TestStep {
    /// Writes instructions, warnings and equipment as markdown sections with
    /// the given heading level.
    pub(crate) fn fmt_sections(&self, f: &mut fmt::Formatter<'_>, level: &str) -> fmt::Result {
        if !self.instructions.is_empty() {
            writeln!(f, "{level} Instructions")?;
            writeln!(f)?;
            for (i, instruction) in self.instructions.iter().enumerate() {
                writeln!(f, "{}. {instruction}", i + 1)?;
            }
            writeln!(f)?;
        }

        if !self.safety_warnings.is_empty() {
            writeln!(f, "{level} Safety Warnings")?;
            writeln!(f)?;
            for warning in &self.safety_warnings {
                writeln!(f, "- ⚠ {warning}")?;
            }
            writeln!(f)?;
        }

        if !self.required_equipment.is_empty() {
            writeln!(f, "{level} Required Equipment")?;
            writeln!(f)?;
            for item in &self.required_equipment {
                writeln!(f, "- {item}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for TestStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category.label())?;
        writeln!(f, "- Test type: {}", self.test_type)?;
        if let Some(time) = &self.estimated_time {
            writeln!(f, "- Estimated time: {time}")?;
        }
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        self.fmt_sections(f, "####")
    }
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status.with_icon())?;
        if let Some(measurement) = self.measurement() {
            write!(f, ": {measurement}")?;
        }
        write!(f, " ({})", LocalDateTime(&self.timestamp))?;
        if let Some(notes) = &self.notes {
            write!(f, " - {notes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = &self.progress;
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.address, self.id, progress.completed, progress.total
        )?;
        writeln!(f)?;
        writeln!(f, "- **Technician**: {}", self.technician)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        if self.has_failures() {
            writeln!(f, "- **Failed**: {}", progress.failed)?;
        }
        if self.status == SessionStatus::InProgress {
            writeln!(
                f,
                "- **Current step**: {} of {}",
                self.current_step_index + 1,
                progress.total
            )?;
        }
        writeln!(f, "- **Started**: {}", LocalDateTime(&self.started_at))?;
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- **Completed**: {}", LocalDateTime(completed_at))?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for SessionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Overview(self))
    }
}
