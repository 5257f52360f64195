//! Filter types for querying the recipe catalog.

use super::Difficulty;

/// Filter options for listing recipes. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Case-insensitive partial match on name or cuisine
    pub search: Option<String>,

    /// Exact cuisine match
    pub cuisine: Option<String>,

    pub difficulty: Option<Difficulty>,

    /// Only recipes flagged special (`Some(true)`) or regular (`Some(false)`)
    pub special: Option<bool>,
}

impl RecipeFilter {
    /// Whether no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.cuisine.is_none()
            && self.difficulty.is_none()
            && self.special.is_none()
    }
}

impl TryFrom<&crate::params::ListRecipes> for RecipeFilter {
    type Error = crate::ForkcastError;

    /// Convert ListRecipes parameters to a RecipeFilter.
    ///
    /// Blank strings are treated as "no filter" and the difficulty string is
    /// parsed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkcast_core::{
    ///     models::{Difficulty, RecipeFilter},
    ///     params::ListRecipes,
    /// };
    ///
    /// let params = ListRecipes {
    ///     search: Some("  ".to_string()),
    ///     difficulty: Some("easy".to_string()),
    ///     ..Default::default()
    /// };
    /// let filter = RecipeFilter::try_from(&params)?;
    /// assert_eq!(filter.search, None);
    /// assert_eq!(filter.difficulty, Some(Difficulty::Easy));
    /// # forkcast_core::Result::<()>::Ok(())
    /// ```
    fn try_from(params: &crate::params::ListRecipes) -> Result<Self, Self::Error> {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let difficulty = non_blank(&params.difficulty)
            .map(|d| {
                d.parse()
                    .map_err(|e: String| crate::ForkcastError::invalid_input("difficulty").with_reason(e))
            })
            .transpose()?;

        Ok(Self {
            search: non_blank(&params.search),
            cuisine: non_blank(&params.cuisine),
            difficulty,
            special: params.special,
        })
    }
}
