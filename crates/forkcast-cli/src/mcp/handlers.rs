//! MCP tool handlers implementation

use forkcast_core::{display::OperationStatus, params as core, Planner};
use jiff::Zoned;
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types derive JsonSchema only behind the `schema` feature and
// know nothing about MCP. This transparent wrapper gives rmcp the
// Deserialize + JsonSchema it needs while passing both straight through to
// the wrapped core type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type CreateRecipe = McpParams<core::CreateRecipe>;
pub type UpdateRecipe = McpParams<core::UpdateRecipe>;
pub type ListRecipes = McpParams<core::ListRecipes>;
pub type DeleteRecipe = McpParams<core::DeleteRecipe>;
pub type GenerateSchedule = McpParams<core::GenerateSchedule>;
pub type SetBudgets = McpParams<core::SetBudgets>;
pub type AddPhoto = McpParams<core::AddPhoto>;
pub type MonthQuery = McpParams<core::MonthQuery>;
pub type UpdateNotificationSettings = McpParams<core::UpdateNotificationSettings>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        output.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Planner,
}

impl McpHandlers {
    pub fn new(planner: Planner) -> Self {
        Self { planner }
    }

    pub async fn list_recipes(&self, Parameters(params): Parameters<ListRecipes>) -> McpResult {
        debug!("list_recipes: {params:?}");
        let recipes = self
            .planner
            .list_recipes_display(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list recipes", &e))?;
        text(recipes)
    }

    pub async fn show_recipe(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_recipe: {params:?}");
        let id = params.as_ref().id;
        match self
            .planner
            .get_recipe(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get recipe", &e))?
        {
            Some(recipe) => text(recipe),
            None => Err(ErrorData::invalid_params(
                format!("Recipe with ID {id} not found"),
                None,
            )),
        }
    }

    pub async fn add_recipe(&self, Parameters(params): Parameters<CreateRecipe>) -> McpResult {
        debug!("add_recipe: {params:?}");
        let result = self
            .planner
            .create_recipe_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add recipe", &e))?;
        text(result)
    }

    pub async fn update_recipe(&self, Parameters(params): Parameters<UpdateRecipe>) -> McpResult {
        debug!("update_recipe: {params:?}");
        let id = params.as_ref().id;
        match self
            .planner
            .update_recipe_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update recipe", &e))?
        {
            Some(result) => text(result),
            None => Err(ErrorData::invalid_params(
                format!("Recipe with ID {id} not found"),
                None,
            )),
        }
    }

    pub async fn delete_recipe(&self, Parameters(params): Parameters<DeleteRecipe>) -> McpResult {
        debug!("delete_recipe: {params:?}");
        let id = params.as_ref().id;
        match self
            .planner
            .delete_recipe_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete recipe", &e))?
        {
            Some(result) => text(result),
            None => text(OperationStatus::failure(format!(
                "Recipe with ID {id} not found"
            ))),
        }
    }

    pub async fn mark_cooked(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("mark_cooked: {params:?}");
        let recipe = self
            .planner
            .mark_cooked(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to record cooking", &e))?;
        text(OperationStatus::success(format!(
            "Marked '{}' as cooked",
            recipe.name
        )))
    }

    pub async fn generate_schedule(
        &self,
        Parameters(params): Parameters<GenerateSchedule>,
    ) -> McpResult {
        debug!("generate_schedule: {params:?}");
        let week = self
            .planner
            .generate_schedule(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate schedule", &e))?;
        text(week)
    }

    pub async fn show_schedule(&self) -> McpResult {
        let week = self
            .planner
            .get_schedule()
            .await
            .map_err(|e| to_mcp_error("Failed to read schedule", &e))?;
        match week {
            Some(week) => text(week),
            None => text("No schedule yet. Use generate_schedule to plan a week."),
        }
    }

    pub async fn todays_recipe(&self) -> McpResult {
        let today = self
            .planner
            .todays_recipe(&Zoned::now())
            .await
            .map_err(|e| to_mcp_error("Failed to read schedule", &e))?;
        match today {
            Some((day, recipe)) => text(format!("**Today ({day})**\n\n{recipe}")),
            None => text("Nothing planned for today."),
        }
    }

    pub async fn get_budgets(&self) -> McpResult {
        let budgets = self
            .planner
            .get_budgets()
            .await
            .map_err(|e| to_mcp_error("Failed to read cooking times", &e))?;
        text(budgets)
    }

    pub async fn set_budgets(&self, Parameters(params): Parameters<SetBudgets>) -> McpResult {
        debug!("set_budgets: {params:?}");
        let budgets = self
            .planner
            .set_budgets(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save cooking times", &e))?;
        text(budgets)
    }

    pub async fn add_photo(&self, Parameters(params): Parameters<AddPhoto>) -> McpResult {
        debug!("add_photo: {params:?}");
        let result = self
            .planner
            .add_photo_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add photo", &e))?;
        text(result)
    }

    pub async fn monthly_review(&self, Parameters(params): Parameters<MonthQuery>) -> McpResult {
        debug!("monthly_review: {params:?}");
        let review = self
            .planner
            .monthly_review(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to build monthly review", &e))?;
        text(review)
    }

    pub async fn update_notification_settings(
        &self,
        Parameters(params): Parameters<UpdateNotificationSettings>,
    ) -> McpResult {
        debug!("update_notification_settings: {params:?}");
        let settings = self
            .planner
            .update_notification_settings(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save reminder settings", &e))?;
        text(settings)
    }

    pub async fn dashboard(&self) -> McpResult {
        let dashboard = self
            .planner
            .dashboard(&Zoned::now())
            .await
            .map_err(|e| to_mcp_error("Failed to build dashboard", &e))?;
        text(dashboard)
    }
}
