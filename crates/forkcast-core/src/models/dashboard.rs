//! Dashboard summary.

use serde::{Deserialize, Serialize};

use super::{Day, Recipe};

/// At-a-glance view of the profile for a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    pub today: Day,
    pub total_recipes: usize,
    /// Days with a recipe in the stored schedule
    pub planned_days: usize,
    pub photos_this_month: usize,
    pub todays_recipe: Option<Recipe>,
    /// Most recently cooked first, at most three
    pub recent_recipes: Vec<Recipe>,
}

/// Number of recipes shown in the "recently cooked" list.
pub const RECENT_RECIPES: usize = 3;

/// Picks the most recently cooked recipes; never-cooked ones sort last.
pub fn recent_recipes(recipes: &[Recipe], limit: usize) -> Vec<Recipe> {
    let mut sorted: Vec<&Recipe> = recipes.iter().collect();
    // Option<Timestamp> orders None first, so reverse puts it last.
    sorted.sort_by(|a, b| b.last_cooked.cmp(&a.last_cooked));
    sorted.into_iter().take(limit).cloned().collect()
}
