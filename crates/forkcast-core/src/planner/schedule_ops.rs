//! Weekly schedule operations for the Planner.

use jiff::Zoned;

use super::Planner;
use crate::{
    error::Result,
    models::{Day, Recipe, WeekSchedule},
    params::GenerateSchedule,
    schedule,
};

impl Planner {
    /// Generates a new week from the current catalog and stores it,
    /// replacing the previous week.
    ///
    /// Budgets start from the saved preferences; `params.budgets` overrides
    /// individual days for this run. With `save_budgets` the resulting
    /// budgets become the new preferences.
    ///
    /// # Errors
    ///
    /// `ForkcastError::InvalidConfiguration` when the resulting budgets are
    /// incomplete or not positive. Nothing is stored in that case.
    pub async fn generate_schedule(&self, params: &GenerateSchedule) -> Result<WeekSchedule> {
        let overrides = params.budgets.clone();
        let seed = params.seed;
        let save_budgets = params.save_budgets;

        self.with_db(move |db| {
            let recipes = db.list_recipes(None)?;
            let mut budgets = db.get_budgets()?;
            budgets.merge(&overrides);

            let week = match seed {
                Some(seed) => {
                    schedule::generate_with(&recipes, &budgets, &mut schedule::seeded_picker(seed))?
                }
                None => schedule::generate(&recipes, &budgets)?,
            };

            db.save_schedule_with_budgets(&week, save_budgets.then_some(&budgets))?;
            Ok(week)
        })
        .await
    }

    /// The stored week, if one was generated.
    pub async fn get_schedule(&self) -> Result<Option<WeekSchedule>> {
        self.with_db(|db| db.get_schedule()).await
    }

    /// The recipe planned for the day `now` falls on.
    pub async fn todays_recipe(&self, now: &Zoned) -> Result<Option<(Day, Recipe)>> {
        let today = Day::from(now.weekday());
        let week = self.get_schedule().await?;
        Ok(week
            .as_ref()
            .and_then(|week| week.recipe_for(today))
            .map(|recipe| (today, recipe.clone())))
    }
}
