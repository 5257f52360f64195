//! Sample data, export/import and dashboard operations for the Planner.

use jiff::Zoned;

use super::Planner;
use crate::{
    error::Result,
    models::{
        dashboard::{recent_recipes, RECENT_RECIPES},
        AppDataDocument, Dashboard, Day,
    },
    seed,
};

impl Planner {
    /// Puts the sample recipes into an empty catalog.
    ///
    /// Returns how many recipes were inserted; 0 when the catalog already
    /// has recipes. This is the only place sample data is created.
    pub async fn initialize_sample_data(&self) -> Result<usize> {
        let inserted = self
            .with_db(|db| db.seed_recipes(seed::sample_recipes()))
            .await?;
        if inserted > 0 {
            log::info!("Initialized catalog with {inserted} sample recipes");
        }
        Ok(inserted)
    }

    /// Everything the profile holds, as an export document.
    pub async fn export_app_data(&self) -> Result<AppDataDocument> {
        let app_data = self.with_db(|db| db.export_app_data()).await?;
        Ok(AppDataDocument { app_data })
    }

    /// Replaces the whole profile with `document`.
    pub async fn import_app_data(&self, document: AppDataDocument) -> Result<()> {
        self.with_db(move |db| db.import_app_data(&document.app_data))
            .await
    }

    /// Summary of the profile as of `now`.
    pub async fn dashboard(&self, now: &Zoned) -> Result<Dashboard> {
        let today = Day::from(now.weekday());
        let date = now.date();

        self.with_db(move |db| {
            let recipes = db.list_recipes(None)?;
            let schedule = db.get_schedule()?;
            let photos_this_month = db.list_photos(date.year(), date.month())?.len();

            Ok(Dashboard {
                today,
                total_recipes: recipes.len(),
                planned_days: schedule.as_ref().map_or(0, |week| week.planned_days()),
                photos_this_month,
                todays_recipe: schedule
                    .as_ref()
                    .and_then(|week| week.recipe_for(today))
                    .cloned(),
                recent_recipes: recent_recipes(&recipes, RECENT_RECIPES),
            })
        })
        .await
    }
}
