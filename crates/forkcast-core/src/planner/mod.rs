//! High-level planner API for recipes, schedules, photos and reminders.
//!
//! This module provides the main [`Planner`] interface. The planner sits
//! between the interfaces (CLI, MCP) and the database: it validates raw
//! parameters, runs the schedule generator and hands persistence to
//! [`crate::db::Database`] on a blocking thread.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (handlers.rs)  │───▶│ (recipe_ops,    │───▶│   (via db/)     │
//! │                 │    │  schedule_ops…) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers        Validation            Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`recipe_ops`]: Catalog operations
//! - [`schedule_ops`]: Generating and reading the weekly schedule
//! - [`settings_ops`]: Cooking-time budgets and reminder settings
//! - [`photo_ops`]: Monthly photo log and review stats
//! - [`data_ops`]: Sample data, export/import and the dashboard
//! - [`handlers`]: Operations returning display wrappers
//!
//! # Examples
//!
//! ```rust,no_run
//! use forkcast_core::{params::GenerateSchedule, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/forkcast.db"))
//!     .build()
//!     .await?;
//!
//! planner.initialize_sample_data().await?;
//! let week = planner.generate_schedule(&GenerateSchedule::default()).await?;
//! println!("{week}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{db::Database, error::ForkcastError, Result};

pub mod builder;
pub mod data_ops;
pub mod handlers;
pub mod photo_ops;
pub mod recipe_ops;
pub mod schedule_ops;
pub mod settings_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface. Cheap to clone; every operation opens its own
/// connection.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file this planner works on.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(ForkcastError::join)?
    }
}
