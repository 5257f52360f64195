use forkcast_core::{params::CreateRecipe, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, forkcast_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Minimal valid recipe parameters.
pub fn recipe(name: &str, cuisine: &str, cooking_time: i64, is_special: bool) -> CreateRecipe {
    CreateRecipe {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        cooking_time,
        ingredients: vec!["Salt".to_string(), "Pepper".to_string()],
        instructions: vec!["Season".to_string(), "Cook".to_string()],
        is_special,
        ..Default::default()
    }
}
