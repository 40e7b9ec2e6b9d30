//! Data models for steps, results and sessions.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that presentation stays apart from the data
//! structures.
//!
//! - [`TestStep`]: authored, immutable catalog content
//! - [`StepResult`]: pass/fail plus optional measurement, at most one per step
//! - [`TestSession`]: ordered step snapshot, current position and results
//! - [`SessionProgress`]: counters derived from a session, never stored
//!
//! # Examples
//!
//! ```rust
//! use circuit_core::{
//!     controller::SessionController,
//!     models::{InstallationDetails, ResultStatus, Technician},
//!     params::ResultEntry,
//!     Catalog,
//! };
//!
//! let catalog = Catalog::builtin();
//! let mut controller = SessionController::start(
//!     &catalog,
//!     InstallationDetails {
//!         address: "12 Mill Lane".to_string(),
//!         ..Default::default()
//!     },
//!     Technician {
//!         name: "Sam Okafor".to_string(),
//!         registration: None,
//!     },
//! )
//! .unwrap();
//!
//! controller
//!     .record_result("continuity", ResultEntry::new(ResultStatus::Completed))
//!     .unwrap();
//! let progress = controller.session().progress();
//! assert_eq!(progress.completed, 1);
//! assert_eq!(progress.remaining, progress.total - 1);
//! ```

pub mod result;
pub mod session;
pub mod status;
pub mod step;
pub mod summary;


pub use result::StepResult;
pub use session::{InstallationDetails, SessionRecord, Technician, TestSession};
pub use status::{ResultStatus, SessionStatus, TestCategory};
pub use step::TestStep;
pub use summary::{SessionProgress, SessionSummary};
