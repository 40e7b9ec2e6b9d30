//! The three session views: overview, current step and results.
//!
//! Each view borrows a [`SessionRecord`] and only reads from it.

use std::{fmt, str::FromStr};

use super::{
    datetime::{Elapsed, LocalDateTime},
    models::PENDING_ICON,
};
use crate::models::{ResultStatus, SessionRecord, TestSession, TestStep};

/// Which view of a session to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionView {
    /// Metadata, progress and the step list
    #[default]
    Overview,
    /// Details of the step the operator is on
    CurrentStep,
    /// Recorded outcomes and what is still pending
    Results,
}

impl FromStr for SessionView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overview" => Ok(SessionView::Overview),
            "step" | "current" | "current-step" => Ok(SessionView::CurrentStep),
            "results" => Ok(SessionView::Results),
            _ => Err(format!("Invalid session view: {s}")),
        }
    }
}

impl SessionView {
    /// Renders `record` in this view.
    pub fn render(self, record: &SessionRecord) -> String {
        match self {
            SessionView::Overview => Overview(record).to_string(),
            SessionView::CurrentStep => CurrentStep(record).to_string(),
            SessionView::Results => ResultsReport(record).to_string(),
        }
    }
}

fn step_icon(session: &TestSession, step: &TestStep) -> &'static str {
    match session.result_for(&step.id) {
        Some(result) => match result.status {
            ResultStatus::Completed => "✓",
            ResultStatus::Failed => "✗",
        },
        None => PENDING_ICON,
    }
}

/// Session header, metadata, progress and the step list.
pub struct Overview<'a>(pub &'a SessionRecord);

impl fmt::Display for Overview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let session = &record.session;
        let installation = session.installation();
        let technician = session.technician();
        let progress = session.progress();

        writeln!(f, "# {}. {}", record.id, installation.address)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", session.status())?;
        match &technician.registration {
            Some(registration) => {
                writeln!(f, "- Technician: {} ({registration})", technician.name)?
            }
            None => writeln!(f, "- Technician: {}", technician.name)?,
        }
        if let Some(client) = &installation.client {
            writeln!(f, "- Client: {client}")?;
        }
        writeln!(f, "- Started: {}", LocalDateTime(&session.started_at()))?;
        if let Some(completed_at) = session.completed_at() {
            writeln!(f, "- Completed: {}", LocalDateTime(&completed_at))?;
            writeln!(
                f,
                "- Duration: {}",
                Elapsed {
                    from: session.started_at(),
                    to: completed_at,
                }
            )?;
        }
        writeln!(
            f,
            "- Progress: {}/{} passed ({}%), {} failed, {} pending",
            progress.completed,
            progress.total,
            progress.percent_complete(),
            progress.failed,
            progress.remaining
        )?;

        if let Some(desc) = &installation.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for (i, step) in session.steps().iter().enumerate() {
            let marker = if i == session.current_step_index() {
                "➤ "
            } else {
                ""
            };
            writeln!(
                f,
                "- {marker}{}. {} {} ({})",
                i + 1,
                step_icon(session, step),
                step.title,
                step.id
            )?;
        }

        Ok(())
    }
}

/// Full details of the current step, with its result when recorded.
pub struct CurrentStep<'a>(pub &'a SessionRecord);

impl fmt::Display for CurrentStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = &self.0.session;
        let step = session.current_step();

        writeln!(
            f,
            "# Step {} of {}: {}",
            session.current_step_index() + 1,
            session.steps().len(),
            step.title
        )?;
        writeln!(f)?;
        writeln!(f, "- Step ID: {}", step.id)?;
        writeln!(f, "- Category: {}", step.category.label())?;
        writeln!(f, "- Test type: {}", step.test_type)?;
        if let Some(time) = &step.estimated_time {
            writeln!(f, "- Estimated time: {time}")?;
        }
        match session.result_for(&step.id) {
            Some(result) => writeln!(f, "- Result: {result}")?,
            None => writeln!(f, "- Result: {PENDING_ICON} Pending")?,
        }
        writeln!(f)?;

        if !step.description.is_empty() {
            writeln!(f, "{}", step.description)?;
            writeln!(f)?;
        }

        step.fmt_sections(f, "##")
    }
}

/// Recorded outcomes in step order, followed by the pending steps.
pub struct ResultsReport<'a>(pub &'a SessionRecord);

impl fmt::Display for ResultsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let session = &record.session;
        let progress = session.progress();

        writeln!(
            f,
            "# Results for session {}: {}",
            record.id,
            session.installation().address
        )?;
        writeln!(f)?;
        writeln!(f, "- Passed: {}", progress.completed)?;
        writeln!(f, "- Failed: {}", progress.failed)?;
        writeln!(f, "- Pending: {}", progress.remaining)?;
        writeln!(f)?;

        if progress.recorded() == 0 {
            writeln!(f, "No results recorded.")?;
        } else {
            writeln!(f, "## Recorded")?;
            writeln!(f)?;
            for step in session.steps() {
                if let Some(result) = session.result_for(&step.id) {
                    writeln!(f, "- {}: {result}", step.title)?;
                }
            }
        }

        if progress.remaining > 0 {
            writeln!(f)?;
            writeln!(f, "## Pending")?;
            writeln!(f)?;
            for step in session
                .steps()
                .iter()
                .filter(|step| session.result_for(&step.id).is_none())
            {
                writeln!(f, "- {PENDING_ICON} {} ({})", step.title, step.id)?;
            }
        }

        Ok(())
    }
}
