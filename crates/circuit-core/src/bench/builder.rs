//! Builder for creating and configuring SessionBench instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::SessionBench;
use crate::{
    catalog::Catalog,
    db::Database,
    error::{BenchError, JoinResultExt, Result},
};

/// Builder for creating and configuring SessionBench instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBenchBuilder {
    database_path: Option<PathBuf>,
    catalog: Option<Catalog>,
}

impl SessionBenchBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/circuit/sessions.db` or
    /// `~/.local/share/circuit/sessions.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the catalog new sessions are started from. Defaults to
    /// [`Catalog::builtin`].
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds the configured service, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::XdgDirectory` if no default path can be found,
    /// `BenchError::FileSystem` if the parent directory cannot be created
    /// and `BenchError::Database` if database initialization fails
    pub async fn build(self) -> Result<SessionBench> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| BenchError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(|_| ()))
            .await
            .join_context()??;

        debug!("Using session database at {}", db_path.display());
        Ok(SessionBench::new(
            db_path,
            self.catalog.unwrap_or_else(Catalog::builtin),
        ))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("circuit")
            .place_data_file("sessions.db")
            .map_err(|e| BenchError::XdgDirectory(e.to_string()))
    }
}
