//! Tests for the planner module.

use std::collections::BTreeMap;

use jiff::{tz::TimeZone, Timestamp, Zoned};
use tempfile::TempDir;

use super::*;
use crate::{
    models::Day,
    params::{
        CreateRecipe, DeleteRecipe, GenerateSchedule, Id, ListRecipes, SetBudgets,
        UpdateNotificationSettings, UpdateRecipe,
    },
};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn recipe_params(name: &str, cooking_time: i64, is_special: bool) -> CreateRecipe {
    CreateRecipe {
        name: name.to_string(),
        cuisine: "Italian".to_string(),
        cooking_time,
        ingredients: vec!["Pasta".to_string()],
        instructions: vec!["Boil water".to_string()],
        is_special,
        ..Default::default()
    }
}

fn at(instant: &str) -> Zoned {
    instant
        .parse::<Timestamp>()
        .expect("valid timestamp")
        .to_zoned(TimeZone::UTC)
}

#[tokio::test]
async fn test_builder_creates_parent_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("forkcast.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");

    assert!(db_path.exists());
    assert_eq!(planner.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_create_recipe_validates_before_storing() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .create_recipe(&recipe_params("Broken", 0, false))
        .await
        .unwrap_err();
    assert!(matches!(err, ForkcastError::InvalidInput { .. }));

    let recipes = planner
        .list_recipes(&ListRecipes::default())
        .await
        .expect("Failed to list recipes");
    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_update_recipe_reports_changes() {
    let (_temp_dir, planner) = create_test_planner().await;
    let recipe = planner
        .create_recipe(&recipe_params("Carbonara", 25, false))
        .await
        .expect("Failed to create recipe");

    let (updated, changes) = planner
        .update_recipe(&UpdateRecipe {
            id: recipe.id,
            cooking_time: Some(20),
            difficulty: Some("easy".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to update recipe")
        .expect("Recipe should exist");

    assert_eq!(updated.cooking_time, 20);
    assert_eq!(
        changes,
        vec![
            "Cooking time set to 20 min".to_string(),
            "Difficulty set to easy".to_string()
        ]
    );

    let missing = planner
        .update_recipe(&UpdateRecipe {
            id: 999,
            name: Some("Nope".to_string()),
            ..Default::default()
        })
        .await
        .expect("Update of missing recipe should not fail");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_delete_recipe_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;
    let recipe = planner
        .create_recipe(&recipe_params("Carbonara", 25, false))
        .await
        .expect("Failed to create recipe");

    let err = planner
        .delete_recipe(&DeleteRecipe {
            id: recipe.id,
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ForkcastError::InvalidInput { ref field, .. } if field == "confirmed"));
    assert!(planner
        .get_recipe(&Id { id: recipe.id })
        .await
        .expect("Failed to get recipe")
        .is_some());

    let deleted = planner
        .delete_recipe(&DeleteRecipe {
            id: recipe.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete recipe");
    assert_eq!(deleted.map(|r| r.name), Some("Carbonara".to_string()));
}

#[tokio::test]
async fn test_mark_cooked() {
    let (_temp_dir, planner) = create_test_planner().await;
    let recipe = planner
        .create_recipe(&recipe_params("Carbonara", 25, false))
        .await
        .expect("Failed to create recipe");

    let cooked = planner
        .mark_cooked(&Id { id: recipe.id })
        .await
        .expect("Failed to mark cooked");
    assert!(cooked.last_cooked.is_some());

    let err = planner.mark_cooked(&Id { id: 42 }).await.unwrap_err();
    assert!(matches!(err, ForkcastError::RecipeNotFound { id: 42 }));
}

#[tokio::test]
async fn test_generate_schedule_stores_week() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .initialize_sample_data()
        .await
        .expect("Failed to seed");

    let week = planner
        .generate_schedule(&GenerateSchedule::default())
        .await
        .expect("Failed to generate schedule");

    // Three regular recipes fill Monday to Wednesday; one special lands on Saturday.
    assert_eq!(week.planned_days(), 4);
    assert!(week.recipe_for(Day::Saturday).is_some_and(|r| r.is_special));
    for day in [Day::Thursday, Day::Friday, Day::Sunday] {
        assert!(week.recipe_for(day).is_none(), "{day} should be empty");
    }

    let stored = planner
        .get_schedule()
        .await
        .expect("Failed to read schedule")
        .expect("Schedule should be stored");
    assert_eq!(stored, week);
}

#[tokio::test]
async fn test_generate_schedule_with_seed_is_reproducible() {
    let (_temp_dir, planner) = create_test_planner().await;
    for (name, minutes) in [("A", 10), ("B", 10), ("C", 10), ("D", 10), ("E", 10)] {
        planner
            .create_recipe(&recipe_params(name, minutes, false))
            .await
            .expect("Failed to create recipe");
    }

    let params = GenerateSchedule {
        seed: Some(7),
        ..Default::default()
    };
    let first = planner.generate_schedule(&params).await.expect("first run");
    let second = planner.generate_schedule(&params).await.expect("second run");

    let names = |week: &crate::models::WeekSchedule| {
        week.planned()
            .map(|(day, recipe)| (day, recipe.name.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&first), names(&second));
}

#[tokio::test]
async fn test_generate_schedule_budget_overrides() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .create_recipe(&recipe_params("Slow Roast", 90, false))
        .await
        .expect("Failed to create recipe");

    let week = planner
        .generate_schedule(&GenerateSchedule {
            budgets: BTreeMap::from([(Day::Wednesday, 120)]),
            ..Default::default()
        })
        .await
        .expect("Failed to generate schedule");
    assert_eq!(
        week.recipe_for(Day::Wednesday).map(|r| r.name.as_str()),
        Some("Slow Roast")
    );

    // Override was not saved
    let budgets = planner.get_budgets().await.expect("Failed to get budgets");
    assert_eq!(budgets.get(Day::Wednesday), Some(30));

    planner
        .generate_schedule(&GenerateSchedule {
            budgets: BTreeMap::from([(Day::Wednesday, 120)]),
            save_budgets: true,
            ..Default::default()
        })
        .await
        .expect("Failed to generate schedule");
    let budgets = planner.get_budgets().await.expect("Failed to get budgets");
    assert_eq!(budgets.get(Day::Wednesday), Some(120));
}

#[tokio::test]
async fn test_invalid_budget_keeps_previous_schedule() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .initialize_sample_data()
        .await
        .expect("Failed to seed");
    let week = planner
        .generate_schedule(&GenerateSchedule::default())
        .await
        .expect("Failed to generate schedule");

    let err = planner
        .generate_schedule(&GenerateSchedule {
            budgets: BTreeMap::from([(Day::Monday, 0)]),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ForkcastError::InvalidConfiguration { .. }));

    let stored = planner.get_schedule().await.expect("Failed to read schedule");
    assert_eq!(stored, Some(week));
}

#[tokio::test]
async fn test_set_budgets_merges_and_validates() {
    let (_temp_dir, planner) = create_test_planner().await;

    let budgets = planner
        .set_budgets(&SetBudgets {
            budgets: BTreeMap::from([(Day::Friday, 45)]),
        })
        .await
        .expect("Failed to set budgets");
    assert_eq!(budgets.get(Day::Friday), Some(45));
    assert_eq!(budgets.get(Day::Saturday), Some(60));

    let err = planner
        .set_budgets(&SetBudgets {
            budgets: BTreeMap::from([(Day::Sunday, -1)]),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ForkcastError::InvalidConfiguration { .. }));

    let saved = planner.get_budgets().await.expect("Failed to get budgets");
    assert_eq!(saved, budgets);
}

#[tokio::test]
async fn test_update_notification_settings_partial() {
    let (_temp_dir, planner) = create_test_planner().await;

    let settings = planner
        .update_notification_settings(&UpdateNotificationSettings {
            enabled: Some(true),
            ..Default::default()
        })
        .await
        .expect("Failed to update settings");
    assert!(settings.enabled);
    assert_eq!(settings.time.to_string(), "11:00");

    let settings = planner
        .update_notification_settings(&UpdateNotificationSettings {
            time: Some("18:30".to_string()),
            days: Some(vec![Day::Saturday]),
            ..Default::default()
        })
        .await
        .expect("Failed to update settings");
    assert!(settings.enabled);
    assert_eq!(settings.time.to_string(), "18:30");
    assert_eq!(settings.days.len(), 1);

    let err = planner
        .update_notification_settings(&UpdateNotificationSettings {
            time: Some("7pm".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ForkcastError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_todays_recipe_and_dashboard() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .create_recipe(&recipe_params("Carbonara", 25, false))
        .await
        .expect("Failed to create recipe");
    planner
        .generate_schedule(&GenerateSchedule::default())
        .await
        .expect("Failed to generate schedule");

    // 2024-03-04 is a Monday, the only day a single recipe can fill
    let monday = at("2024-03-04T12:00:00Z");
    let (day, recipe) = planner
        .todays_recipe(&monday)
        .await
        .expect("Failed to get today's recipe")
        .expect("Monday should be planned");
    assert_eq!(day, Day::Monday);
    assert_eq!(recipe.name, "Carbonara");

    let tuesday = at("2024-03-05T12:00:00Z");
    assert!(planner
        .todays_recipe(&tuesday)
        .await
        .expect("Failed to get today's recipe")
        .is_none());

    let dashboard = planner.dashboard(&monday).await.expect("Failed to build dashboard");
    assert_eq!(dashboard.today, Day::Monday);
    assert_eq!(dashboard.total_recipes, 1);
    assert_eq!(dashboard.planned_days, 1);
    assert_eq!(dashboard.photos_this_month, 0);
    assert_eq!(dashboard.recent_recipes.len(), 1);
}

#[tokio::test]
async fn test_handlers_render_results() {
    let (_temp_dir, planner) = create_test_planner().await;

    let created = planner
        .create_recipe_result(&recipe_params("Carbonara", 25, false))
        .await
        .expect("Failed to create recipe");
    assert!(created
        .to_string()
        .starts_with(&format!("Created recipe with ID: {}", created.resource.id)));

    let listed = planner
        .list_recipes_display(&ListRecipes {
            search: Some("carb".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to list recipes");
    assert_eq!(listed.len(), 1);

    let none = planner
        .delete_recipe_result(&DeleteRecipe {
            id: 999,
            confirmed: true,
        })
        .await
        .expect("Delete of missing recipe should not fail");
    assert!(none.is_none());
}
