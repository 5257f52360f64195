//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{MonthlyPhoto, MonthlyStats, Recipe};

/// Newtype wrapper for displaying a list of recipes.
///
/// # Examples
///
/// ```rust
/// use forkcast_core::{
///     display::Recipes,
///     models::{Difficulty, Recipe},
/// };
///
/// let recipe = Recipe {
///     id: 3,
///     name: "Caesar Salad".to_string(),
///     cuisine: "American".to_string(),
///     cooking_time: 15,
///     difficulty: Difficulty::Easy,
///     ingredients: vec!["Romaine lettuce".to_string()],
///     instructions: vec!["Toss".to_string()],
///     tags: vec!["salad".to_string()],
///     image: None,
///     is_special: false,
///     last_cooked: None,
/// };
///
/// let output = format!("{}", Recipes(vec![recipe]));
/// assert!(output.contains("## Caesar Salad (ID: 3)"));
/// assert_eq!(format!("{}", Recipes(vec![])), "No recipes found.\n");
/// ```
pub struct Recipes(pub Vec<Recipe>);

impl Recipes {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of recipes in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the recipes.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.0.iter()
    }
}

impl Index<usize> for Recipes {
    type Output = Recipe;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Recipes {
    type Item = Recipe;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Recipes {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Recipes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No recipes found.");
        }
        for recipe in &self.0 {
            recipe.fmt_summary(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a month's photos.
pub struct Photos(pub Vec<MonthlyPhoto>);

impl Photos {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyPhoto> {
        self.0.iter()
    }
}

impl fmt::Display for Photos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No photos found.");
        }
        for photo in &self.0 {
            write!(f, "{photo}")?;
        }
        Ok(())
    }
}

/// Stats plus the photos they were computed from.
pub struct MonthlyReview {
    pub stats: MonthlyStats,
    pub photos: Photos,
}

impl fmt::Display for MonthlyReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stats)?;
        writeln!(f, "\n## Photos")?;
        writeln!(f)?;
        write!(f, "{}", self.photos)
    }
}
