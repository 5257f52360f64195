//! Monthly photo log operations for the Planner.

use jiff::Zoned;

use super::Planner;
use crate::{
    error::Result,
    models::{MonthlyPhoto, MonthlyStats},
    params::{AddPhoto, Id, MonthQuery},
};

impl Planner {
    /// Logs a cooking photo. The date defaults to today.
    pub async fn add_photo(&self, params: &AddPhoto) -> Result<MonthlyPhoto> {
        let photo = params.validate()?;
        let date = photo.date.unwrap_or_else(|| Zoned::now().date());

        self.with_db(move |db| {
            db.add_photo(
                date,
                &photo.recipe_name,
                &photo.image,
                photo.notes.as_deref(),
            )
        })
        .await
    }

    /// Photos of the requested month (default: the current one), oldest
    /// first.
    pub async fn list_photos(&self, params: &MonthQuery) -> Result<Vec<MonthlyPhoto>> {
        let (year, month) = params.resolve(Zoned::now().date())?;
        self.with_db(move |db| db.list_photos(year, month)).await
    }

    /// Removes a photo, returning it, or `None` if it didn't exist.
    pub async fn delete_photo(&self, params: &Id) -> Result<Option<MonthlyPhoto>> {
        let id = params.id;
        self.with_db(move |db| db.delete_photo(id)).await
    }

    /// Review stats for the requested month (default: the current one).
    pub async fn monthly_stats(&self, params: &MonthQuery) -> Result<MonthlyStats> {
        let (year, month) = params.resolve(Zoned::now().date())?;
        self.with_db(move |db| {
            let photos = db.list_photos(year, month)?;
            let recipes = db.list_recipes(None)?;
            Ok(MonthlyStats::compute(year, month, &photos, &recipes))
        })
        .await
    }
}
