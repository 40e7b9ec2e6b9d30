//! Async session service used by the command line and the tool server.
//!
//! [`SessionBench`] owns the database location and the step catalog. Each
//! operation opens the database on a blocking thread, loads the session,
//! drives a [`SessionController`](crate::controller::SessionController) and
//! writes the result back under optimistic versioning:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (display types) │───▶│ (controller +   │───▶│   (via db/)     │
//! │                 │    │  spawn_blocking)│    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: creates a [`SessionBench`] with a database path and catalog
//! - [`session_ops`]: operations returning domain values
//! - [`session_handlers`]: the same operations wrapped in display types
//!
//! # Examples
//!
//! ```rust,no_run
//! use circuit_core::{
//!     models::{InstallationDetails, Technician},
//!     params::{Id, RecordResult, StartSession},
//!     SessionBenchBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bench = SessionBenchBuilder::new().build().await?;
//!
//! let record = bench
//!     .start_session(&StartSession {
//!         installation: InstallationDetails {
//!             address: "27 Station Road".to_string(),
//!             ..Default::default()
//!         },
//!         technician: Technician {
//!             name: "Jo Bright".to_string(),
//!             registration: None,
//!         },
//!     })
//!     .await?;
//!
//! bench
//!     .record_result(&RecordResult {
//!         session_id: record.id,
//!         step_id: "safe-isolation".to_string(),
//!         status: "completed".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! bench.next_step(&Id { id: record.id }).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;

pub mod builder;
pub mod session_handlers;
pub mod session_ops;


pub use builder::SessionBenchBuilder;

/// Main service interface for guided test sessions.
#[derive(Debug, Clone)]
pub struct SessionBench {
    pub(crate) db_path: PathBuf,
    pub(crate) catalog: Catalog,
}

impl SessionBench {
    pub(crate) fn new(db_path: PathBuf, catalog: Catalog) -> Self {
        Self { db_path, catalog }
    }

    /// The catalog new sessions are started from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Location of the SQLite database.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
