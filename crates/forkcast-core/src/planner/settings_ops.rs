//! Budget and reminder settings operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::{DayBudgets, NotificationSettings},
    params::{SetBudgets, UpdateNotificationSettings},
};

impl Planner {
    /// Saved cooking-time budgets, or 30/60 minutes when none were saved.
    pub async fn get_budgets(&self) -> Result<DayBudgets> {
        self.with_db(|db| db.get_budgets()).await
    }

    /// Merges `params.budgets` onto the saved budgets and stores the result.
    ///
    /// # Errors
    ///
    /// `ForkcastError::InvalidConfiguration` if any day would end up
    /// non-positive; the saved budgets are left untouched.
    pub async fn set_budgets(&self, params: &SetBudgets) -> Result<DayBudgets> {
        let updates = params.budgets.clone();
        self.with_db(move |db| {
            let mut budgets = db.get_budgets()?;
            budgets.merge(&updates);
            budgets.validate()?;
            db.set_budgets(&budgets)?;
            Ok(budgets)
        })
        .await
    }

    /// Saved reminder settings, or the disabled default.
    pub async fn get_notification_settings(&self) -> Result<NotificationSettings> {
        self.with_db(|db| db.get_notification_settings()).await
    }

    /// Changes only the provided reminder fields.
    pub async fn update_notification_settings(
        &self,
        params: &UpdateNotificationSettings,
    ) -> Result<NotificationSettings> {
        let time = params.parsed_time()?;
        let enabled = params.enabled;
        let days = params.days.clone();

        self.with_db(move |db| {
            let mut settings = db.get_notification_settings()?;
            if let Some(enabled) = enabled {
                settings.enabled = enabled;
            }
            if let Some(time) = time {
                settings.time = time;
            }
            if let Some(days) = days {
                settings.days = days.into_iter().collect();
            }
            db.set_notification_settings(&settings)?;
            Ok(settings)
        })
        .await
    }
}
