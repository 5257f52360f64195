//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{ForkcastError, Result},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/forkcast/forkcast.db` or
    /// `~/.local/share/forkcast/forkcast.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner instance, creating the database file and
    /// its parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `ForkcastError::FileSystem` if the parent directory cannot be
    /// created, `ForkcastError::XdgDirectory` if no default location can be
    /// resolved, and `ForkcastError::Database` if schema setup fails.
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ForkcastError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop))
            .await
            .map_err(ForkcastError::join)??;

        log::debug!("Using database at {}", db_path.display());
        Ok(Planner::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("forkcast")
            .place_data_file("forkcast.db")
            .map_err(|e| ForkcastError::XdgDirectory(e.to_string()))
    }
}
