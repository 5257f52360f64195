//! Storage for the current week's schedule.

use std::collections::BTreeMap;

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{
    recipe_queries::select_recipe,
    settings_queries::{write_setting, BUDGETS_KEY},
    utils::{parse_column, sql_id},
};
use crate::{
    error::{DatabaseResultExt, ForkcastError, Result},
    models::{Day, DayAssignment, DayBudgets, WeekSchedule},
};

const DELETE_DAYS_SQL: &str = "DELETE FROM schedule_days";
const DELETE_META_SQL: &str = "DELETE FROM schedule_meta";
const INSERT_DAY_SQL: &str =
    "INSERT INTO schedule_days (day, cooking_time, recipe_id) VALUES (?1, ?2, ?3)";
const UPSERT_META_SQL: &str = "INSERT INTO schedule_meta (id, generated_at) VALUES (1, ?1) \
                               ON CONFLICT(id) DO UPDATE SET generated_at = excluded.generated_at";
const SELECT_META_SQL: &str = "SELECT generated_at FROM schedule_meta WHERE id = 1";
const SELECT_DAYS_SQL: &str =
    "SELECT day, cooking_time, recipe_id FROM schedule_days ORDER BY day";

/// Replaces whatever week is stored with `schedule`. Recipe ids missing from
/// `known_recipe` are stored as empty days.
pub(super) fn write_schedule<F>(
    conn: &Connection,
    schedule: &WeekSchedule,
    known_recipe: F,
) -> Result<()>
where
    F: Fn(u64) -> bool,
{
    conn.execute(DELETE_DAYS_SQL, [])
        .db_context("Failed to clear schedule")?;

    for (day, assignment) in &schedule.days {
        let recipe_id = assignment
            .suggested_recipe
            .as_ref()
            .map(|recipe| recipe.id)
            .filter(|id| known_recipe(*id))
            .map(sql_id);
        conn.execute(
            INSERT_DAY_SQL,
            params![day.index(), assignment.cooking_time, recipe_id],
        )
        .db_context("Failed to store schedule day")?;
    }

    conn.execute(UPSERT_META_SQL, params![schedule.generated_at.to_string()])
        .db_context("Failed to store schedule metadata")?;
    Ok(())
}

pub(super) fn clear_schedule(conn: &Connection) -> Result<()> {
    conn.execute(DELETE_DAYS_SQL, [])
        .db_context("Failed to clear schedule")?;
    conn.execute(DELETE_META_SQL, [])
        .db_context("Failed to clear schedule metadata")?;
    Ok(())
}

pub(super) fn read_schedule(conn: &Connection) -> Result<Option<WeekSchedule>> {
    let generated_at: Option<Timestamp> = conn
        .query_row(SELECT_META_SQL, [], |row| parse_column(row, 0))
        .optional()
        .db_context("Failed to query schedule metadata")?;
    let Some(generated_at) = generated_at else {
        return Ok(None);
    };

    let mut stmt = conn
        .prepare(SELECT_DAYS_SQL)
        .db_context("Failed to prepare query")?;
    let rows: Vec<(u8, u32, Option<i64>)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .db_context("Failed to query schedule")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch schedule")?;

    let mut days = BTreeMap::new();
    for (index, cooking_time, recipe_id) in rows {
        let day = Day::from_index(index).ok_or_else(|| ForkcastError::Configuration {
            message: format!("Stored schedule has invalid day index {index}"),
        })?;
        let recipe = match recipe_id {
            Some(id) => select_recipe(conn, id as u64)?,
            None => None,
        };
        days.insert(
            day,
            DayAssignment {
                cooking_time,
                suggested_recipe: recipe,
            },
        );
    }

    Ok(Some(WeekSchedule { generated_at, days }))
}

impl super::Database {
    /// Stores `schedule` as the current week, replacing the previous one in a
    /// single transaction.
    pub fn save_schedule(&mut self, schedule: &WeekSchedule) -> Result<()> {
        self.save_schedule_with_budgets(schedule, None)
    }

    /// Like [`save_schedule`](Self::save_schedule), also storing `budgets` as
    /// the new cooking-time preferences when given. Either both are written
    /// or neither is.
    pub fn save_schedule_with_budgets(
        &mut self,
        schedule: &WeekSchedule,
        budgets: Option<&DayBudgets>,
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if let Some(budgets) = budgets {
            write_setting(&tx, BUDGETS_KEY, budgets)?;
        }
        write_schedule(&tx, schedule, |_| true)?;

        tx.commit().db_context("Failed to commit transaction")?;
        log::debug!("Stored schedule generated at {}", schedule.generated_at);
        Ok(())
    }

    /// Loads the current week with recipes resolved to full records.
    ///
    /// Days whose recipe was deleted since generation come back empty.
    pub fn get_schedule(&self) -> Result<Option<WeekSchedule>> {
        read_schedule(&self.connection)
    }
}
