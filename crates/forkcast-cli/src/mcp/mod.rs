//! MCP server implementation for Forkcast
//!
//! This module implements the Model Context Protocol server for Forkcast,
//! letting AI assistants browse the recipe catalog, plan the week and log
//! what was cooked.

use std::future::Future;

use anyhow::Result;
use forkcast_core::Planner;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddPhoto, CreateRecipe, DeleteRecipe, GenerateSchedule, Id, ListRecipes, McpResult,
    MonthQuery, SetBudgets, UpdateNotificationSettings, UpdateRecipe,
};

const INSTRUCTIONS: &str = r#"Forkcast is a personal recipe planner. It keeps a recipe catalog and generates a weekly cooking schedule that fits how much time the user has each day.

## Core Concepts
- **Recipes**: name, cuisine, cooking time in minutes, difficulty, ingredients, instructions. Recipes marked special are only ever planned on Saturday or Sunday, at most one per week.
- **Cooking time**: the minutes available on each day (defaults: 30 on weekdays, 60 on weekends). A recipe is only planned on a day whose cooking time it fits.
- **Schedule**: one week, Monday to Sunday, each day with at most one recipe and no recipe used twice. Generating a new week replaces the previous one. Days where nothing fits stay empty.
- **Photos**: a log of dishes the user cooked, reviewed per month.

## Workflow Examples

### Planning a Week
1. `list_recipes` to see the catalog, `add_recipe` to extend it
2. `set_budgets` if the user has more or less time on some days, e.g. {"budgets": {"Friday": 45}}
3. `generate_schedule` to plan the week; pass `budgets` to override days for one run only
4. `show_schedule` or `todays_recipe` to read it back

### After Cooking
1. `mark_cooked` with the recipe ID
2. `add_photo` with the dish name and image
3. `monthly_review` for a month's stats

## Tool Categories
- **Catalog**: list_recipes, show_recipe, add_recipe, update_recipe, delete_recipe, mark_cooked
- **Schedule**: generate_schedule, show_schedule, todays_recipe, get_budgets, set_budgets
- **Photos**: add_photo, monthly_review
- **Other**: update_notification_settings, dashboard"#;

/// MCP server for Forkcast
#[derive(Clone)]
pub struct ForkcastMcpServer {
    planner: Planner,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ForkcastMcpServer {
    /// Create a new Forkcast MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "list_recipes",
        description = "List recipes in the catalog, ordered by ID. Optional filters: search (case-insensitive text matched against name and cuisine), cuisine (exact), difficulty (easy, medium, hard), special (true for weekend-only recipes, false for regular ones)."
    )]
    async fn list_recipes(&self, params: Parameters<ListRecipes>) -> McpResult {
        self.handlers().list_recipes(params).await
    }

    #[tool(
        name = "show_recipe",
        description = "Show one recipe with its ingredients, instructions and when it was last cooked."
    )]
    async fn show_recipe(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_recipe(params).await
    }

    #[tool(
        name = "add_recipe",
        description = "Add a recipe. Requires name, cuisine, cooking_time (positive minutes), at least one ingredient and at least one instruction. Optional: difficulty (easy, medium, hard; default medium), tags, image, is_special (weekend-only). Returns the new recipe ID."
    )]
    async fn add_recipe(&self, params: Parameters<CreateRecipe>) -> McpResult {
        self.handlers().add_recipe(params).await
    }

    #[tool(
        name = "update_recipe",
        description = "Edit a recipe by ID. Only the fields provided change; ingredients, instructions and tags are replaced as a whole. Returns the list of changes made."
    )]
    async fn update_recipe(&self, params: Parameters<UpdateRecipe>) -> McpResult {
        self.handlers().update_recipe(params).await
    }

    #[tool(
        name = "delete_recipe",
        description = "Permanently delete a recipe. Requires confirmed=true. If the recipe is in the current schedule its day becomes empty; other days are kept."
    )]
    async fn delete_recipe(&self, params: Parameters<DeleteRecipe>) -> McpResult {
        self.handlers().delete_recipe(params).await
    }

    #[tool(
        name = "mark_cooked",
        description = "Record that a recipe was cooked just now. Feeds the 'recently cooked' list on the dashboard."
    )]
    async fn mark_cooked(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().mark_cooked(params).await
    }

    #[tool(
        name = "generate_schedule",
        description = "Plan a new week from the catalog, replacing the current one. Optional: budgets (minutes per day keyed by day name, e.g. {\"Friday\": 45}) overriding the saved cooking times for this run, save_budgets=true to keep those overrides, seed for a reproducible result."
    )]
    async fn generate_schedule(&self, params: Parameters<GenerateSchedule>) -> McpResult {
        self.handlers().generate_schedule(params).await
    }

    #[tool(
        name = "show_schedule",
        description = "Show the current week: the recipe planned for each day and the day's cooking time."
    )]
    async fn show_schedule(&self) -> McpResult {
        self.handlers().show_schedule().await
    }

    #[tool(
        name = "todays_recipe",
        description = "Show the recipe planned for today, in the server's local time zone."
    )]
    async fn todays_recipe(&self) -> McpResult {
        self.handlers().todays_recipe().await
    }

    #[tool(
        name = "get_budgets",
        description = "Show the saved cooking time per day."
    )]
    async fn get_budgets(&self) -> McpResult {
        self.handlers().get_budgets().await
    }

    #[tool(
        name = "set_budgets",
        description = "Change the saved cooking time of some days, e.g. {\"budgets\": {\"Saturday\": 90}}. Days left out keep their value. Every value must be positive."
    )]
    async fn set_budgets(&self, params: Parameters<SetBudgets>) -> McpResult {
        self.handlers().set_budgets(params).await
    }

    #[tool(
        name = "add_photo",
        description = "Log a photo of a cooked dish. Requires recipe_name and image (path or URL). Optional notes and date (YYYY-MM-DD, default today)."
    )]
    async fn add_photo(&self, params: Parameters<AddPhoto>) -> McpResult {
        self.handlers().add_photo(params).await
    }

    #[tool(
        name = "monthly_review",
        description = "Stats and photos for one month: dishes cooked, cuisines tried and special recipes. year and month default to the current month."
    )]
    async fn monthly_review(&self, params: Parameters<MonthQuery>) -> McpResult {
        self.handlers().monthly_review(params).await
    }

    #[tool(
        name = "update_notification_settings",
        description = "Change the daily 'time to cook' reminder: enabled, time (HH:MM) and days (list of day names). Only provided fields change."
    )]
    async fn update_notification_settings(
        &self,
        params: Parameters<UpdateNotificationSettings>,
    ) -> McpResult {
        self.handlers().update_notification_settings(params).await
    }

    #[tool(
        name = "dashboard",
        description = "Summary: today's recipe, catalog size, planned days this week, photos this month and recently cooked recipes."
    )]
    async fn dashboard(&self) -> McpResult {
        self.handlers().dashboard().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ForkcastMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "forkcast".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: ForkcastMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Forkcast MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
