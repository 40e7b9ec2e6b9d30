//! Core library for guided circuit test sessions.
//!
//! A technician walks an ordered catalog of electrical test steps (safe
//! isolation, continuity, insulation resistance and so on), records a pass or
//! fail outcome with an optional measurement for each, moves back and forth
//! between steps, and finally marks the session complete.
//!
//! - [`controller`]: the session state machine; the only code that mutates a
//!   session
//! - [`catalog`]: the built-in step flow and JSON-loaded alternatives
//! - [`models`]: steps, results, sessions and derived progress
//! - [`bench`]: async service that persists sessions through [`db`]
//! - [`display`]: markdown rendering shared by the terminal and tool server
//!
//! # Quick Start
//!
//! ```rust
//! use circuit_core::{
//!     controller::SessionController,
//!     models::{InstallationDetails, ResultStatus, SessionStatus, Technician},
//!     params::ResultEntry,
//!     Catalog,
//! };
//!
//! let mut controller = SessionController::start(
//!     &Catalog::builtin(),
//!     InstallationDetails {
//!         address: "3 Orchard Close".to_string(),
//!         ..Default::default()
//!     },
//!     Technician {
//!         name: "Priya Shah".to_string(),
//!         registration: Some("NAPIT 40721".to_string()),
//!     },
//! )?;
//!
//! controller.record_result(
//!     "safe-isolation",
//!     ResultEntry::new(ResultStatus::Completed),
//! )?;
//! controller.next_step();
//! controller.record_result(
//!     "continuity",
//!     ResultEntry::new(ResultStatus::Completed).with_measurement("0.38", "Ω"),
//! )?;
//!
//! let session = controller.complete();
//! assert_eq!(session.status(), SessionStatus::Completed);
//! assert_eq!(session.completed_steps(), 2);
//! # Ok::<(), circuit_core::BenchError>(())
//! ```

pub mod bench;
pub mod catalog;
pub mod controller;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use bench::{SessionBench, SessionBenchBuilder};
pub use catalog::Catalog;
pub use controller::SessionController;
pub use db::Database;
pub use display::{
    CatalogSteps, CreateResult, DeleteResult, OperationStatus, SessionSummaries, SessionView,
    UpdateResult,
};
pub use error::{BenchError, Result};
pub use models::{
    InstallationDetails, ResultStatus, SessionProgress, SessionRecord, SessionStatus,
    SessionSummary, StepResult, Technician, TestCategory, TestSession, TestStep,
};
pub use params::{
    DeleteSession, Id, ListSessions, RecordResult, ResultEntry, ShowSession, StartSession,
    StepLookup,
};
