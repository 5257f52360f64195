//! Recipe catalog operations for the Planner.

use jiff::Timestamp;

use super::Planner;
use crate::{
    error::{ForkcastError, Result},
    models::{Recipe, RecipeChanges, RecipeDraft, RecipeFilter},
    params::{CreateRecipe, DeleteRecipe, Id, ListRecipes, UpdateRecipe},
};

impl Planner {
    /// Validates and adds a recipe to the catalog.
    ///
    /// # Errors
    ///
    /// `ForkcastError::InvalidInput` when any field fails validation; nothing
    /// is stored in that case.
    pub async fn create_recipe(&self, params: &CreateRecipe) -> Result<Recipe> {
        let draft = RecipeDraft::try_from(params.clone())?;
        let recipe = self.with_db(move |db| db.create_recipe(draft)).await?;
        log::info!("Added recipe {} '{}'", recipe.id, recipe.name);
        Ok(recipe)
    }

    /// Retrieves a recipe by its ID.
    pub async fn get_recipe(&self, params: &Id) -> Result<Option<Recipe>> {
        let id = params.id;
        self.with_db(move |db| db.get_recipe(id)).await
    }

    /// Lists recipes matching the given criteria, ordered by id.
    pub async fn list_recipes(&self, params: &ListRecipes) -> Result<Vec<Recipe>> {
        let filter = RecipeFilter::try_from(params)?;
        self.with_db(move |db| db.list_recipes(Some(&filter))).await
    }

    /// Applies a partial edit. Returns the updated recipe with the list of
    /// changes made, or `None` if the recipe doesn't exist.
    pub async fn update_recipe(
        &self,
        params: &UpdateRecipe,
    ) -> Result<Option<(Recipe, Vec<String>)>> {
        let id = params.id;
        let changes = RecipeChanges::try_from(params.clone())?;
        self.with_db(move |db| db.update_recipe(id, changes)).await
    }

    /// Permanently deletes a recipe. Requires `confirmed`.
    ///
    /// Returns the deleted recipe, or `None` if it didn't exist. A stored
    /// schedule keeps its other days; the deleted recipe's day becomes empty.
    pub async fn delete_recipe(&self, params: &DeleteRecipe) -> Result<Option<Recipe>> {
        if !params.confirmed {
            return Err(ForkcastError::invalid_input("confirmed")
                .with_reason("deleting a recipe is permanent and must be confirmed"));
        }
        let id = params.id;
        let deleted = self.with_db(move |db| db.delete_recipe(id)).await?;
        if let Some(recipe) = &deleted {
            log::info!("Deleted recipe {} '{}'", recipe.id, recipe.name);
        }
        Ok(deleted)
    }

    /// Records that a recipe was cooked just now.
    pub async fn mark_cooked(&self, params: &Id) -> Result<Recipe> {
        let id = params.id;
        self.with_db(move |db| db.mark_cooked(id, Timestamp::now()))
            .await
    }

    /// Distinct cuisines in the catalog, sorted.
    pub async fn list_cuisines(&self) -> Result<Vec<String>> {
        self.with_db(|db| db.list_cuisines()).await
    }
}
