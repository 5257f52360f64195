//! Parameter structures for forkcast operations
//!
//! Shared parameter structures used by every interface (CLI, MCP) without
//! framework-specific derives. Interface layers wrap or convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Core params carry raw user input (strings for enums and dates). Validation
//! happens when they are converted into model types, e.g.
//! [`crate::models::RecipeDraft`] or [`AddPhoto::validate`]. JSON schema
//! derives are only compiled with the `schema` feature.

use std::collections::BTreeMap;

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    models::{Day, ReminderTime},
    ForkcastError, Result,
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for adding a recipe to the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateRecipe {
    /// Name of the dish (required)
    pub name: String,
    /// Cuisine, e.g. "Italian" (required)
    pub cuisine: String,
    /// Cooking time in minutes (must be positive)
    pub cooking_time: i64,
    /// One of easy, medium, hard (defaults to medium)
    pub difficulty: Option<String>,
    /// Ingredients in order; blank entries are dropped
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Instructions in order; blank entries are dropped
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional image path or URL
    pub image: Option<String>,
    /// Reserve the recipe for weekends
    #[serde(default)]
    pub is_special: bool,
}

/// Parameters for editing a recipe. Only provided fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateRecipe {
    /// ID of the recipe to edit
    pub id: u64,
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub cooking_time: Option<i64>,
    pub difficulty: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub is_special: Option<bool>,
}

/// Parameters for listing recipes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListRecipes {
    /// Case-insensitive text matched against name and cuisine
    pub search: Option<String>,
    /// Exact cuisine to keep
    pub cuisine: Option<String>,
    /// easy, medium or hard
    pub difficulty: Option<String>,
    /// true for special recipes only, false for regular only
    pub special: Option<bool>,
}

/// Parameters for deleting a recipe with confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteRecipe {
    /// ID of the recipe to delete
    pub id: u64,
    /// Must be true, deletion is permanent
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for generating a new weekly schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateSchedule {
    /// Per-day minutes overriding the saved budgets for this run
    #[serde(default)]
    pub budgets: BTreeMap<Day, i64>,
    /// Seed for a reproducible schedule
    pub seed: Option<u64>,
    /// Save the resulting budgets as the new preferences
    #[serde(default)]
    pub save_budgets: bool,
}

/// Parameters for changing the saved cooking-time budgets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetBudgets {
    /// Minutes per day; days left out keep their current value
    pub budgets: BTreeMap<Day, i64>,
}

/// Parameters for logging a cooking photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddPhoto {
    /// Name of the dish in the photo
    pub recipe_name: String,
    /// Image path or URL
    pub image: String,
    /// Optional notes
    pub notes: Option<String>,
    /// Date cooked as YYYY-MM-DD (defaults to today)
    pub date: Option<String>,
}

/// A photo that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPhoto {
    pub recipe_name: String,
    pub image: String,
    pub notes: Option<String>,
    pub date: Option<Date>,
}

impl AddPhoto {
    /// Validates the photo fields and parses the date.
    pub fn validate(&self) -> Result<ValidPhoto> {
        let recipe_name = self.recipe_name.trim();
        if recipe_name.is_empty() {
            return Err(ForkcastError::invalid_input("recipe_name").with_reason("must not be empty"));
        }
        let image = self.image.trim();
        if image.is_empty() {
            return Err(ForkcastError::invalid_input("image").with_reason("must not be empty"));
        }
        let date = self
            .date
            .as_deref()
            .map(|d| {
                d.trim().parse::<Date>().map_err(|e| {
                    ForkcastError::invalid_input("date").with_reason(format!("'{d}': {e}"))
                })
            })
            .transpose()?;

        Ok(ValidPhoto {
            recipe_name: recipe_name.to_string(),
            image: image.to_string(),
            notes: self
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
            date,
        })
    }
}

/// Parameters selecting a calendar month. Missing parts default to today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MonthQuery {
    /// Four-digit year
    pub year: Option<i16>,
    /// Month, 1-12
    pub month: Option<i8>,
}

impl MonthQuery {
    /// Resolves the query against `today`.
    pub fn resolve(&self, today: Date) -> Result<(i16, i8)> {
        let year = self.year.unwrap_or(today.year());
        let month = self.month.unwrap_or(today.month());
        if !(1..=12).contains(&month) {
            return Err(ForkcastError::invalid_input("month")
                .with_reason(format!("must be between 1 and 12, got {month}")));
        }
        Date::new(year, month, 1).map_err(|e| {
            ForkcastError::invalid_input("year").with_reason(e.to_string())
        })?;
        Ok((year, month))
    }
}

/// Parameters for changing reminder settings. Only provided fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateNotificationSettings {
    pub enabled: Option<bool>,
    /// Time of day as HH:MM
    pub time: Option<String>,
    /// Days the reminder fires on
    pub days: Option<Vec<Day>>,
}

impl UpdateNotificationSettings {
    /// Parses the time field, if present.
    pub fn parsed_time(&self) -> Result<Option<ReminderTime>> {
        self.time
            .as_deref()
            .map(|t| {
                t.parse::<ReminderTime>()
                    .map_err(|e| ForkcastError::invalid_input("time").with_reason(e))
            })
            .transpose()
    }
}
