//! Recipe model definition and related functionality.

use std::str::FromStr;

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How demanding a recipe is to cook.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// A dish in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique, stable identifier assigned by the catalog
    pub id: u64,

    pub name: String,

    pub cuisine: String,

    /// Cooking time in minutes, always positive
    pub cooking_time: u32,

    #[serde(default)]
    pub difficulty: Difficulty,

    /// Ingredients in the order they are listed
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Instructions in the order they are performed
    #[serde(default)]
    pub instructions: Vec<String>,

    /// Free-form tags, without duplicates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Image path or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Special recipes are reserved for weekends
    #[serde(default)]
    pub is_special: bool,

    /// When the recipe was last cooked (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_cooked: Option<Timestamp>,
}

impl Recipe {
    /// Whether the recipe can be cooked within `budget` minutes.
    pub fn fits(&self, budget: u32) -> bool {
        self.cooking_time <= budget
    }
}
