//! Monthly cooking photo log.

use std::collections::BTreeSet;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Recipe;

/// A photo of something the user cooked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPhoto {
    pub id: u64,

    /// Day the dish was cooked
    pub date: Date,

    /// Free-text recipe name, matched against the catalog by exact name
    pub recipe_name: String,

    /// Image path or URL
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Summary of one month of photos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyStats {
    pub year: i16,
    pub month: i8,
    pub total_photos: usize,
    /// Distinct cuisines, counting unmatched photos as "Unknown"
    pub unique_cuisines: usize,
    /// Photos whose recipe is flagged special
    pub special_recipes: usize,
}

impl MonthlyStats {
    /// Computes stats for `photos`, resolving cuisines through `recipes`.
    pub fn compute(year: i16, month: i8, photos: &[MonthlyPhoto], recipes: &[Recipe]) -> Self {
        let lookup = |name: &str| recipes.iter().find(|recipe| recipe.name == name);

        let cuisines: BTreeSet<&str> = photos
            .iter()
            .map(|photo| {
                lookup(&photo.recipe_name)
                    .map(|recipe| recipe.cuisine.as_str())
                    .unwrap_or("Unknown")
            })
            .collect();

        let special_recipes = photos
            .iter()
            .filter(|photo| lookup(&photo.recipe_name).is_some_and(|recipe| recipe.is_special))
            .count();

        Self {
            year,
            month,
            total_photos: photos.len(),
            unique_cuisines: cuisines.len(),
            special_recipes,
        }
    }
}
