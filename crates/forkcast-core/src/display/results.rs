//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create, update,
//! and delete operations with consistent messaging and resource display.

use std::fmt;

use crate::models::{MonthlyPhoto, Recipe};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use forkcast_core::{
///     display::CreateResult,
///     models::{Difficulty, Recipe},
/// };
///
/// let recipe = Recipe {
///     id: 1,
///     name: "Beef Stir Fry".to_string(),
///     cuisine: "Chinese".to_string(),
///     cooking_time: 20,
///     difficulty: Difficulty::Easy,
///     ingredients: vec!["Beef strips".to_string()],
///     instructions: vec!["Stir fry".to_string()],
///     tags: vec![],
///     image: None,
///     is_special: false,
///     last_cooked: None,
/// };
///
/// let output = format!("{}", CreateResult::new(recipe));
/// assert!(output.starts_with("Created recipe with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created recipe with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<MonthlyPhoto> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added photo with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes that were applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated recipe with ID: {}", self.resource.id)?;

        writeln!(f)?;
        if self.changes.is_empty() {
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted recipe '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<MonthlyPhoto> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted photo of '{}' from {} (ID: {})",
            self.resource.recipe_name, self.resource.date, self.resource.id
        )
    }
}
