//! Whole-profile export and import.

use std::collections::HashSet;

use super::{
    photo_queries::{insert_photo, select_all_photos},
    recipe_queries::{insert_recipe, select_all_recipes},
    schedule_queries::{clear_schedule, read_schedule, write_schedule},
    settings_queries::{
        read_setting, write_setting, BUDGETS_KEY, DELETE_SETTINGS_SQL, NOTIFICATIONS_KEY,
    },
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::AppData,
};

impl super::Database {
    /// Reads everything the profile holds.
    pub fn export_app_data(&self) -> Result<AppData> {
        Ok(AppData {
            recipes: select_all_recipes(&self.connection)?,
            weekly_schedule: read_schedule(&self.connection)?,
            monthly_photos: select_all_photos(&self.connection)?,
            cooking_time_preferences: read_setting(&self.connection, BUDGETS_KEY)?
                .unwrap_or_default(),
            notification_settings: read_setting(&self.connection, NOTIFICATIONS_KEY)?
                .unwrap_or_default(),
        })
    }

    /// Replaces the whole profile with `data` in one transaction. Recipe and
    /// photo ids are kept as given.
    ///
    /// Nothing is written unless `data` passes [`AppData::validated`].
    pub fn import_app_data(&mut self, data: &AppData) -> Result<()> {
        let data = data.clone().validated()?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        clear_schedule(&tx)?;
        tx.execute("DELETE FROM photos", [])
            .db_context("Failed to clear photos")?;
        tx.execute("DELETE FROM recipes", [])
            .db_context("Failed to clear recipes")?;
        tx.execute(DELETE_SETTINGS_SQL, [])
            .db_context("Failed to clear settings")?;

        for recipe in &data.recipes {
            insert_recipe(&tx, recipe, true)?;
        }
        for photo in &data.monthly_photos {
            insert_photo(&tx, photo, true)?;
        }

        write_setting(&tx, BUDGETS_KEY, &data.cooking_time_preferences)?;
        write_setting(&tx, NOTIFICATIONS_KEY, &data.notification_settings)?;

        if let Some(schedule) = &data.weekly_schedule {
            let ids: HashSet<u64> = data.recipes.iter().map(|r| r.id).collect();
            write_schedule(&tx, schedule, |id| ids.contains(&id))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        log::info!(
            "Imported {} recipes and {} photos",
            data.recipes.len(),
            data.monthly_photos.len()
        );
        Ok(())
    }
}
