//! Whole-profile export document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{
    requests::{required_text, validate_recipe},
    DayBudgets, MonthlyPhoto, NotificationSettings, Recipe, WeekSchedule,
};
use crate::{ForkcastError, Result};

/// Key the application data is stored under in exported documents.
pub const APP_DATA_KEY: &str = "recipe-app-data";

/// Everything a profile holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppData {
    #[serde(default)]
    pub recipes: Vec<Recipe>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_schedule: Option<WeekSchedule>,

    #[serde(default)]
    pub monthly_photos: Vec<MonthlyPhoto>,

    #[serde(default)]
    pub cooking_time_preferences: DayBudgets,

    #[serde(default)]
    pub notification_settings: NotificationSettings,
}

impl AppData {
    /// Runs imported data through the same rules as the create paths.
    /// Recipe text is trimmed and tags are normalized on the way.
    ///
    /// # Errors
    ///
    /// `ForkcastError::InvalidInput` for a malformed recipe or photo, a
    /// repeated id, or a schedule that is not a complete valid week.
    /// `ForkcastError::InvalidConfiguration` for bad cooking-time budgets.
    pub fn validated(self) -> Result<Self> {
        let mut recipe_ids = HashSet::new();
        let mut recipes = Vec::with_capacity(self.recipes.len());
        for recipe in self.recipes {
            let id = recipe.id;
            if !recipe_ids.insert(id) {
                return Err(ForkcastError::invalid_input("recipes")
                    .with_reason(format!("duplicate recipe id {id}")));
            }
            recipes.push(validate_recipe(recipe).map_err(|e| nest_field(e, "recipes", id))?);
        }

        let mut photo_ids = HashSet::new();
        let mut monthly_photos = Vec::with_capacity(self.monthly_photos.len());
        for photo in self.monthly_photos {
            let id = photo.id;
            if !photo_ids.insert(id) {
                return Err(ForkcastError::invalid_input("monthly_photos")
                    .with_reason(format!("duplicate photo id {id}")));
            }
            let checked = MonthlyPhoto {
                recipe_name: required_text("recipe_name", &photo.recipe_name)
                    .map_err(|e| nest_field(e, "monthly_photos", id))?,
                image: required_text("image", &photo.image)
                    .map_err(|e| nest_field(e, "monthly_photos", id))?,
                ..photo
            };
            monthly_photos.push(checked);
        }

        self.cooking_time_preferences.validate()?;
        if let Some(schedule) = &self.weekly_schedule {
            schedule.check_against(&recipes)?;
        }

        Ok(Self {
            recipes,
            monthly_photos,
            ..self
        })
    }
}

/// Prefixes an invalid-input field with the list entry it came from.
fn nest_field(error: ForkcastError, list: &str, id: u64) -> ForkcastError {
    match error {
        ForkcastError::InvalidInput { field, reason } => ForkcastError::InvalidInput {
            field: format!("{list}[{id}].{field}"),
            reason,
        },
        other => other,
    }
}

/// Exported file layout: the data nested under [`APP_DATA_KEY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppDataDocument {
    #[serde(rename = "recipe-app-data")]
    pub app_data: AppData,
}

impl AppDataDocument {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a document, re-reading timestamps and dates into typed values.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
