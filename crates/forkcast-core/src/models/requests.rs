//! Validated request types for writing to the catalog.
//!
//! Parameter structs from [`crate::params`] carry raw user input. Converting
//! them into the types here is where catalog validation happens, so nothing
//! malformed reaches the database or the schedule generator.

use super::{Difficulty, Recipe};
use crate::{ForkcastError, Result};

/// A recipe that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub name: String,
    pub cuisine: String,
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub is_special: bool,
}

/// Validated partial update for an existing recipe.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub cooking_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub is_special: Option<bool>,
}

impl RecipeDraft {
    /// The stored form of the draft under `id`, never cooked.
    pub fn into_recipe(self, id: u64) -> Recipe {
        Recipe {
            id,
            name: self.name,
            cuisine: self.cuisine,
            cooking_time: self.cooking_time,
            difficulty: self.difficulty,
            ingredients: self.ingredients,
            instructions: self.instructions,
            tags: self.tags,
            image: self.image,
            is_special: self.is_special,
            last_cooked: None,
        }
    }
}

impl RecipeChanges {
    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the changes to `recipe` and describes each field that
    /// actually changed value.
    pub fn apply(self, recipe: &mut Recipe) -> Vec<String> {
        let mut changes = Vec::new();

        if let Some(name) = self.name.filter(|n| *n != recipe.name) {
            changes.push(format!("Renamed to '{name}'"));
            recipe.name = name;
        }
        if let Some(cuisine) = self.cuisine.filter(|c| *c != recipe.cuisine) {
            changes.push(format!("Cuisine set to {cuisine}"));
            recipe.cuisine = cuisine;
        }
        if let Some(minutes) = self.cooking_time.filter(|m| *m != recipe.cooking_time) {
            changes.push(format!("Cooking time set to {minutes} min"));
            recipe.cooking_time = minutes;
        }
        if let Some(difficulty) = self.difficulty.filter(|d| *d != recipe.difficulty) {
            changes.push(format!("Difficulty set to {}", difficulty.as_str()));
            recipe.difficulty = difficulty;
        }
        if let Some(ingredients) = self.ingredients.filter(|i| *i != recipe.ingredients) {
            changes.push(format!("Ingredients replaced ({} items)", ingredients.len()));
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions.filter(|i| *i != recipe.instructions) {
            changes.push(format!("Instructions replaced ({} steps)", instructions.len()));
            recipe.instructions = instructions;
        }
        if let Some(tags) = self.tags.filter(|t| *t != recipe.tags) {
            changes.push("Tags updated".to_string());
            recipe.tags = tags;
        }
        if let Some(image) = self.image.filter(|i| recipe.image.as_ref() != Some(i)) {
            changes.push("Image updated".to_string());
            recipe.image = Some(image);
        }
        if let Some(special) = self.is_special.filter(|s| *s != recipe.is_special) {
            changes.push(if special {
                "Marked as special".to_string()
            } else {
                "No longer special".to_string()
            });
            recipe.is_special = special;
        }

        changes
    }
}

pub(crate) fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ForkcastError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn cooking_time(value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(ForkcastError::invalid_input("cooking_time")
            .with_reason(format!("must be a positive number of minutes, got {value}")));
    }
    u32::try_from(value).map_err(|_| {
        ForkcastError::invalid_input("cooking_time").with_reason(format!("too large: {value}"))
    })
}

/// Drops blank lines; errors when nothing is left.
fn required_lines(field: &str, lines: Vec<String>) -> Result<Vec<String>> {
    let cleaned: Vec<String> = lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    if cleaned.is_empty() {
        return Err(ForkcastError::invalid_input(field).with_reason("needs at least one entry"));
    }
    Ok(cleaned)
}

/// Trims tags, drops blanks and repeated tags, keeping first-seen order.
pub(crate) fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !seen.iter().any(|t: &String| t == tag) {
            seen.push(tag.to_string());
        }
    }
    seen
}

/// Applies the [`RecipeDraft`] rules to a recipe that already has an id, such
/// as one read from an export. The id and cooking history are kept.
pub(crate) fn validate_recipe(recipe: Recipe) -> Result<Recipe> {
    let id = recipe.id;
    let last_cooked = recipe.last_cooked;
    let draft = RecipeDraft {
        name: required_text("name", &recipe.name)?,
        cuisine: required_text("cuisine", &recipe.cuisine)?,
        cooking_time: cooking_time(i64::from(recipe.cooking_time))?,
        difficulty: recipe.difficulty,
        ingredients: required_lines("ingredients", recipe.ingredients)?,
        instructions: required_lines("instructions", recipe.instructions)?,
        tags: normalize_tags(recipe.tags),
        image: optional_image(recipe.image),
        is_special: recipe.is_special,
    };
    let mut validated = draft.into_recipe(id);
    validated.last_cooked = last_cooked;
    Ok(validated)
}

fn difficulty(value: &str) -> Result<Difficulty> {
    value
        .parse()
        .map_err(|e: String| ForkcastError::invalid_input("difficulty").with_reason(e))
}

fn optional_image(image: Option<String>) -> Option<String> {
    image
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
}

impl TryFrom<crate::params::CreateRecipe> for RecipeDraft {
    type Error = ForkcastError;

    /// Validate a new recipe.
    ///
    /// # Errors
    ///
    /// * `ForkcastError::InvalidInput` - blank name or cuisine, non-positive
    ///   cooking time, unknown difficulty, or no ingredients/instructions
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkcast_core::{models::RecipeDraft, params::CreateRecipe};
    ///
    /// let params = CreateRecipe {
    ///     name: " Caesar Salad ".to_string(),
    ///     cuisine: "American".to_string(),
    ///     cooking_time: 15,
    ///     ingredients: vec!["Romaine".to_string(), " ".to_string()],
    ///     instructions: vec!["Toss".to_string()],
    ///     tags: vec!["quick".to_string(), "quick".to_string()],
    ///     ..Default::default()
    /// };
    /// let draft = RecipeDraft::try_from(params)?;
    /// assert_eq!(draft.name, "Caesar Salad");
    /// assert_eq!(draft.ingredients, vec!["Romaine".to_string()]);
    /// assert_eq!(draft.tags, vec!["quick".to_string()]);
    /// # forkcast_core::Result::<()>::Ok(())
    /// ```
    fn try_from(params: crate::params::CreateRecipe) -> Result<Self> {
        Ok(Self {
            name: required_text("name", &params.name)?,
            cuisine: required_text("cuisine", &params.cuisine)?,
            cooking_time: cooking_time(params.cooking_time)?,
            difficulty: match params.difficulty.as_deref() {
                Some(d) => difficulty(d)?,
                None => Difficulty::default(),
            },
            ingredients: required_lines("ingredients", params.ingredients)?,
            instructions: required_lines("instructions", params.instructions)?,
            tags: normalize_tags(params.tags),
            image: optional_image(params.image),
            is_special: params.is_special,
        })
    }
}

impl TryFrom<crate::params::UpdateRecipe> for RecipeChanges {
    type Error = ForkcastError;

    /// Validate a partial update. Fields left `None` are untouched; provided
    /// fields follow the same rules as [`RecipeDraft`].
    fn try_from(params: crate::params::UpdateRecipe) -> Result<Self> {
        Ok(Self {
            name: params
                .name
                .as_deref()
                .map(|n| required_text("name", n))
                .transpose()?,
            cuisine: params
                .cuisine
                .as_deref()
                .map(|c| required_text("cuisine", c))
                .transpose()?,
            cooking_time: params.cooking_time.map(cooking_time).transpose()?,
            difficulty: params.difficulty.as_deref().map(difficulty).transpose()?,
            ingredients: params
                .ingredients
                .map(|i| required_lines("ingredients", i))
                .transpose()?,
            instructions: params
                .instructions
                .map(|i| required_lines("instructions", i))
                .transpose()?,
            tags: params.tags.map(normalize_tags),
            image: optional_image(params.image),
            is_special: params.is_special,
        })
    }
}
