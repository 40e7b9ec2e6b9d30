//! Command definitions and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so `circuit-core` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → SessionBench
//! ```

use std::fmt;

use anyhow::{anyhow, Context, Result};
use circuit_core::{
    display::{CatalogSteps, OperationStatus},
    params::{DeleteSession, Id, ListSessions, RecordResult, ShowSession, StartSession, StepLookup},
    InstallationDetails, SessionBench, Technician,
};
use clap::{Args, Subcommand, ValueEnum};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Catalog commands
// ============================================================================

#[derive(Args)]
pub struct ShowCatalogStepArgs {
    #[arg(help = "Identifier of the catalog step (e.g. 'rcd-test')")]
    pub step_id: String,
}

impl From<ShowCatalogStepArgs> for StepLookup {
    fn from(val: ShowCatalogStepArgs) -> Self {
        StepLookup {
            step_id: val.step_id,
        }
    }
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List the steps every new session walks through
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show full instructions for one catalog step
    #[command(alias = "s")]
    Show(ShowCatalogStepArgs),
}

// ============================================================================
// Session commands
// ============================================================================

/// Start a new test session
#[derive(Args)]
pub struct StartSessionArgs {
    #[arg(short, long, help = "Address or location of the installation")]
    pub address: String,
    #[arg(long, help = "Client or duty holder")]
    pub client: Option<String>,
    #[arg(short, long, help = "Extent of the work being tested")]
    pub description: Option<String>,
    #[arg(short, long, help = "Name of the person carrying out the tests")]
    pub technician: String,
    #[arg(short, long, help = "Competent person scheme or registration number")]
    pub registration: Option<String>,
}

impl From<StartSessionArgs> for StartSession {
    fn from(val: StartSessionArgs) -> Self {
        StartSession {
            installation: InstallationDetails {
                address: val.address,
                client: val.client,
                description: val.description,
            },
            technician: Technician {
                name: val.technician,
                registration: val.registration,
            },
        }
    }
}

#[derive(Args)]
pub struct ListSessionsArgs {
    #[arg(long, help = "Show completed sessions instead of those in progress")]
    pub completed: bool,
}

impl From<ListSessionsArgs> for ListSessions {
    fn from(val: ListSessionsArgs) -> Self {
        ListSessions {
            completed: val.completed,
        }
    }
}

#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum SessionViewArg {
    #[default]
    Overview,
    Step,
    Results,
}

impl fmt::Display for SessionViewArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionViewArg::Overview => write!(f, "overview"),
            SessionViewArg::Step => write!(f, "step"),
            SessionViewArg::Results => write!(f, "results"),
        }
    }
}

#[derive(Args)]
pub struct ShowSessionArgs {
    #[arg(help = "Session ID")]
    pub id: u64,
    #[arg(short, long, value_enum, default_value_t, help = "Which view of the session to show")]
    pub view: SessionViewArg,
}

impl From<ShowSessionArgs> for ShowSession {
    fn from(val: ShowSessionArgs) -> Self {
        ShowSession {
            id: val.id,
            view: Some(val.view.to_string()),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ResultStatusArg {
    Completed,
    Failed,
}

impl fmt::Display for ResultStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultStatusArg::Completed => write!(f, "completed"),
            ResultStatusArg::Failed => write!(f, "failed"),
        }
    }
}

/// Record the outcome of a step
#[derive(Args)]
pub struct RecordResultArgs {
    #[arg(help = "Session ID")]
    pub id: u64,
    #[arg(help = "Step to record against (e.g. 'continuity')")]
    pub step_id: String,
    #[arg(short, long, value_enum, help = "Outcome of the test")]
    pub status: ResultStatusArg,
    #[arg(long, help = "Measured value (e.g. '0.42')")]
    pub value: Option<String>,
    #[arg(short, long, help = "Unit of the measured value (e.g. 'Ω', 'MΩ', 'ms')")]
    pub unit: Option<String>,
    #[arg(short, long, help = "Observations")]
    pub notes: Option<String>,
}

impl From<RecordResultArgs> for RecordResult {
    fn from(val: RecordResultArgs) -> Self {
        RecordResult {
            session_id: val.id,
            step_id: val.step_id,
            status: val.status.to_string(),
            value: val.value,
            unit: val.unit,
            notes: val.notes,
        }
    }
}

#[derive(Args)]
pub struct SessionIdArgs {
    #[arg(help = "Session ID")]
    pub id: u64,
}

impl From<SessionIdArgs> for Id {
    fn from(val: SessionIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Args)]
pub struct DeleteSessionArgs {
    #[arg(help = "Session ID to permanently delete")]
    pub id: u64,
    #[arg(long, help = "Confirm permanent deletion")]
    pub confirm: bool,
}

impl From<DeleteSessionArgs> for DeleteSession {
    fn from(val: DeleteSessionArgs) -> Self {
        DeleteSession {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Start a new session over the step catalog
    #[command(alias = "new")]
    Start(StartSessionArgs),
    /// List sessions, in progress by default
    #[command(aliases = ["l", "ls"])]
    List(ListSessionsArgs),
    /// Show a session
    #[command(alias = "s")]
    Show(ShowSessionArgs),
    /// Record a pass or fail result for a step
    #[command(alias = "r")]
    Record(RecordResultArgs),
    /// Move to the next step
    #[command(alias = "n")]
    Next(SessionIdArgs),
    /// Move to the previous step
    #[command(aliases = ["p", "previous"])]
    Prev(SessionIdArgs),
    /// Mark the session completed
    #[command(alias = "done")]
    Complete(SessionIdArgs),
    /// Permanently delete a session and its results
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteSessionArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a [`SessionBench`] and renders the output.
pub struct Cli {
    bench: SessionBench,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(bench: SessionBench, renderer: TerminalRenderer) -> Self {
        Self { bench, renderer }
    }

    pub fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        let catalog = self.bench.catalog();
        match command {
            CatalogCommands::List => {
                let output = format!("# Step Catalog\n\n{}", CatalogSteps(catalog.steps()));
                self.renderer.render(&output)
            }
            CatalogCommands::Show(args) => {
                let params = StepLookup::from(args);
                let step = catalog
                    .get(&params.step_id)
                    .ok_or_else(|| anyhow!("Step '{}' not found in catalog", params.step_id))?;
                self.renderer.render(&step.to_string())
            }
        }
    }

    pub async fn handle_session_command(&self, command: SessionCommands) -> Result<()> {
        match command {
            SessionCommands::Start(args) => {
                let result = self
                    .bench
                    .start_session_result(&args.into())
                    .await
                    .context("Failed to start session")?;
                self.renderer.render(&result.to_string())
            }
            SessionCommands::List(args) => self.list_sessions(&args.into()).await,
            SessionCommands::Show(args) => {
                let params = ShowSession::from(args);
                let output = self
                    .bench
                    .show_session(&params)
                    .await
                    .context("Failed to show session")?
                    .ok_or_else(|| anyhow!("Session with ID {} not found", params.id))?;
                self.renderer.render(&output)
            }
            SessionCommands::Record(args) => {
                let result = self
                    .bench
                    .record_result_update(&args.into())
                    .await
                    .context("Failed to record result")?;
                self.renderer.render(&result.to_string())
            }
            SessionCommands::Next(args) => {
                let result = self
                    .bench
                    .next_step_update(&args.into())
                    .await
                    .context("Failed to move to next step")?;
                self.renderer.render(&result.to_string())
            }
            SessionCommands::Prev(args) => {
                let result = self
                    .bench
                    .previous_step_update(&args.into())
                    .await
                    .context("Failed to move to previous step")?;
                self.renderer.render(&result.to_string())
            }
            SessionCommands::Complete(args) => {
                let result = self
                    .bench
                    .complete_session_update(&args.into())
                    .await
                    .context("Failed to complete session")?;
                self.renderer.render(&result.to_string())
            }
            SessionCommands::Delete(args) => {
                let params = DeleteSession::from(args);
                let output = match self
                    .bench
                    .delete_session_result(&params)
                    .await
                    .context("Failed to delete session")?
                {
                    Some(result) => result.to_string(),
                    None => OperationStatus::failure(format!(
                        "Session with ID {} not found",
                        params.id
                    ))
                    .to_string(),
                };
                self.renderer.render(&output)
            }
        }
    }

    /// Lists sessions under a heading that names which ones are shown.
    pub async fn list_sessions(&self, params: &ListSessions) -> Result<()> {
        let summaries = self
            .bench
            .list_sessions_summary(params)
            .await
            .context("Failed to list sessions")?;

        let title = if params.completed {
            "Completed Sessions"
        } else {
            "Sessions In Progress"
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"))
    }
}
