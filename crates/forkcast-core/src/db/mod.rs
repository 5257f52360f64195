//! Database operations and SQLite management for the recipe planner.
//!
//! This module provides the low-level persistence layer: opening the SQLite
//! file, applying the embedded schema, and one query module per table group
//! (recipes, the stored schedule, photos, settings, and whole-profile
//! import/export).

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod data_queries;
pub mod migrations;
pub mod photo_queries;
pub mod recipe_queries;
pub mod schedule_queries;
pub mod settings_queries;
mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
