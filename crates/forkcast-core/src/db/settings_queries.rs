//! Key/value settings: cooking-time budgets and reminder preferences.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{DayBudgets, NotificationSettings},
};

/// Settings key for per-day cooking-time budgets.
pub const BUDGETS_KEY: &str = "cooking_time_preferences";
/// Settings key for reminder preferences.
pub const NOTIFICATIONS_KEY: &str = "notification_settings";

const SELECT_SETTING_SQL: &str = "SELECT value FROM settings WHERE key = ?1";
const UPSERT_SETTING_SQL: &str = "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3) \
                                  ON CONFLICT(key) DO UPDATE SET value = excluded.value, \
                                  updated_at = excluded.updated_at";
pub(super) const DELETE_SETTINGS_SQL: &str = "DELETE FROM settings";

pub(super) fn read_setting<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    let value: Option<String> = conn
        .query_row(SELECT_SETTING_SQL, params![key], |row| row.get(0))
        .optional()
        .db_context("Failed to query setting")?;

    value
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(Into::into)
}

pub(super) fn write_setting<T: Serialize>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    conn.execute(
        UPSERT_SETTING_SQL,
        params![key, serde_json::to_string(value)?, Timestamp::now().to_string()],
    )
    .db_context("Failed to store setting")?;
    Ok(())
}

impl super::Database {
    /// Saved budgets, or the 30/60 default when none were saved.
    pub fn get_budgets(&self) -> Result<DayBudgets> {
        Ok(read_setting(&self.connection, BUDGETS_KEY)?.unwrap_or_default())
    }

    /// Saves budgets. Callers validate first.
    pub fn set_budgets(&mut self, budgets: &DayBudgets) -> Result<()> {
        write_setting(&self.connection, BUDGETS_KEY, budgets)
    }

    /// Saved reminder settings, or the disabled default.
    pub fn get_notification_settings(&self) -> Result<NotificationSettings> {
        Ok(read_setting(&self.connection, NOTIFICATIONS_KEY)?.unwrap_or_default())
    }

    pub fn set_notification_settings(&mut self, settings: &NotificationSettings) -> Result<()> {
        write_setting(&self.connection, NOTIFICATIONS_KEY, settings)
    }
}
