//! Markdown rendering for sessions, steps and operation outcomes.
//!
//! Domain models implement `Display` directly (see [`models`]). Everything
//! that needs context beyond a single value is a small borrowed wrapper:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  SessionRecord  │───▶│  Views, result  │───▶│    Markdown     │
//! │  TestStep, ...  │    │  & list wrappers│    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`views`]: overview, current step and results views of one session
//! - [`collections`]: session lists and catalog listings
//! - [`results`]: start/update/delete confirmations
//! - [`status`]: single-line success or error messages
//! - [`datetime`]: local time and elapsed-time formatting
//!
//! # Examples
//!
//! ```rust
//! use circuit_core::display::{OperationStatus, SessionView};
//!
//! let view: SessionView = "results".parse().unwrap();
//! assert_eq!(view, SessionView::Results);
//!
//! let status = OperationStatus::success("Session 2 deleted".to_string());
//! assert_eq!(status.to_string(), "Success: Session 2 deleted\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod views;


pub use collections::{CatalogSteps, SessionSummaries};
pub use datetime::{Elapsed, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
pub use views::{CurrentStep, Overview, ResultsReport, SessionView};
