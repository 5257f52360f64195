//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Needed for ON DELETE SET NULL on schedule rows
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Brings databases created by older releases up to [`SCHEMA_VERSION`].
    fn apply_migrations(&self) -> Result<()> {
        let version: i64 = self
            .connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")?;

        if version < SCHEMA_VERSION {
            log::debug!("Migrating database schema from version {version} to {SCHEMA_VERSION}");
            self.connection
                .pragma_update(None, "user_version", SCHEMA_VERSION)
                .db_context("Failed to record schema version")?;
        }

        Ok(())
    }

    /// Version recorded in the open database.
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }
}
