//! Planner operations that return display wrappers.
//!
//! Both the CLI and the MCP server print these directly, so the two
//! interfaces produce identical text.

use super::Planner;
use crate::{
    display::{CreateResult, DeleteResult, MonthlyReview, Photos, Recipes, UpdateResult},
    error::Result,
    models::{MonthlyPhoto, Recipe},
    params::{AddPhoto, CreateRecipe, DeleteRecipe, Id, ListRecipes, MonthQuery, UpdateRecipe},
};

impl Planner {
    /// Lists recipes as a displayable collection.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use forkcast_core::{params::ListRecipes, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let params = ListRecipes {
    ///     search: Some("salad".to_string()),
    ///     ..Default::default()
    /// };
    /// println!("{}", planner.list_recipes_display(&params).await?);
    /// # Result::<(), forkcast_core::ForkcastError>::Ok(())
    /// # };
    /// ```
    pub async fn list_recipes_display(&self, params: &ListRecipes) -> Result<Recipes> {
        Ok(Recipes(self.list_recipes(params).await?))
    }

    pub async fn create_recipe_result(&self, params: &CreateRecipe) -> Result<CreateResult<Recipe>> {
        Ok(CreateResult::new(self.create_recipe(params).await?))
    }

    /// `None` if the recipe doesn't exist.
    pub async fn update_recipe_result(
        &self,
        params: &UpdateRecipe,
    ) -> Result<Option<UpdateResult<Recipe>>> {
        Ok(self
            .update_recipe(params)
            .await?
            .map(|(recipe, changes)| UpdateResult::with_changes(recipe, changes)))
    }

    /// `None` if the recipe doesn't exist.
    pub async fn delete_recipe_result(
        &self,
        params: &DeleteRecipe,
    ) -> Result<Option<DeleteResult<Recipe>>> {
        Ok(self.delete_recipe(params).await?.map(DeleteResult::new))
    }

    pub async fn add_photo_result(&self, params: &AddPhoto) -> Result<CreateResult<MonthlyPhoto>> {
        Ok(CreateResult::new(self.add_photo(params).await?))
    }

    /// `None` if the photo doesn't exist.
    pub async fn delete_photo_result(
        &self,
        params: &Id,
    ) -> Result<Option<DeleteResult<MonthlyPhoto>>> {
        Ok(self.delete_photo(params).await?.map(DeleteResult::new))
    }

    pub async fn photos_display(&self, params: &MonthQuery) -> Result<Photos> {
        Ok(Photos(self.list_photos(params).await?))
    }

    /// Stats and photos for one month.
    pub async fn monthly_review(&self, params: &MonthQuery) -> Result<MonthlyReview> {
        let stats = self.monthly_stats(params).await?;
        let photos = self.photos_display(params).await?;
        Ok(MonthlyReview { stats, photos })
    }
}
