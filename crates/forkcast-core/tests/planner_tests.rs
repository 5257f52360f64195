mod common;

use std::collections::BTreeMap;

use common::{create_test_planner, recipe};
use forkcast_core::{
    models::{AppDataDocument, Day},
    notify::reminder_due,
    params::{
        AddPhoto, DeleteRecipe, GenerateSchedule, Id, ListRecipes, MonthQuery, SetBudgets,
        UpdateNotificationSettings,
    },
    ForkcastError,
};
use jiff::{tz::TimeZone, Timestamp};

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_week_workflow() {
    let (_temp_dir, planner) = create_test_planner().await;

    for (name, cuisine, minutes, special) in [
        ("Shakshuka", "Middle Eastern", 25, false),
        ("Pad Thai", "Thai", 30, false),
        ("Fish Tacos", "Mexican", 20, false),
        ("Risotto", "Italian", 40, false),
        ("Beef Wellington", "British", 55, true),
        ("Paella", "Spanish", 60, true),
    ] {
        planner
            .create_recipe(&recipe(name, cuisine, minutes, special))
            .await
            .expect("Failed to create recipe");
    }

    planner
        .set_budgets(&SetBudgets {
            budgets: BTreeMap::from([(Day::Friday, 45)]),
        })
        .await
        .expect("Failed to set budgets");

    let week = planner
        .generate_schedule(&GenerateSchedule {
            seed: Some(2024),
            ..Default::default()
        })
        .await
        .expect("Failed to generate schedule");

    // No recipe twice, no special on a weekday, at most one special
    let mut seen = Vec::new();
    let mut specials = 0;
    for (day, planned) in week.planned() {
        assert!(!seen.contains(&planned.id), "{} repeated", planned.name);
        seen.push(planned.id);
        let budget = week.get(day).map(|a| a.cooking_time).unwrap_or_default();
        assert!(planned.cooking_time <= budget);
        if planned.is_special {
            assert!(day.is_weekend());
            specials += 1;
        }
    }
    assert_eq!(specials, 1);
    // Risotto only fits on Friday or the weekend, every regular recipe gets a day
    assert_eq!(week.planned_days(), 5);

    // Deleting a planned recipe empties its day but keeps the rest
    let (monday_day, monday_recipe) = week.planned().next().expect("something planned");
    planner
        .delete_recipe(&DeleteRecipe {
            id: monday_recipe.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete recipe");
    let stored = planner
        .get_schedule()
        .await
        .expect("Failed to read schedule")
        .expect("Schedule should still exist");
    assert!(stored.recipe_for(monday_day).is_none());
    assert_eq!(stored.planned_days(), 4);
}

#[tokio::test]
async fn test_photos_and_monthly_review() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .initialize_sample_data()
        .await
        .expect("Failed to seed");

    for (name, date) in [
        ("Chicken Tikka Masala", "2024-03-02"),
        ("Chocolate Lava Cake", "2024-03-09"),
        ("Spaghetti Carbonara", "2024-03-12"),
        ("Street Food Mystery", "2024-03-20"),
        ("Caesar Salad", "2024-04-01"),
    ] {
        planner
            .add_photo(&AddPhoto {
                recipe_name: name.to_string(),
                image: format!("{date}.jpg"),
                notes: None,
                date: Some(date.to_string()),
            })
            .await
            .expect("Failed to add photo");
    }

    let march = MonthQuery {
        year: Some(2024),
        month: Some(3),
    };
    let stats = planner
        .monthly_stats(&march)
        .await
        .expect("Failed to compute stats");
    assert_eq!(stats.total_photos, 4);
    // Indian, French, Italian and Unknown
    assert_eq!(stats.unique_cuisines, 4);
    assert_eq!(stats.special_recipes, 2);

    let review = planner
        .monthly_review(&march)
        .await
        .expect("Failed to build review");
    assert_eq!(review.photos.len(), 4);
    let text = review.to_string();
    assert!(text.contains("- Dishes cooked: 4"));
    assert!(!text.contains("Caesar Salad"));

    let err = planner
        .add_photo(&AddPhoto {
            recipe_name: "Caesar Salad".to_string(),
            image: "x.jpg".to_string(),
            notes: None,
            date: Some("2024-13-01".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ForkcastError::InvalidInput { ref field, .. } if field == "date"));

    let err = planner
        .list_photos(&MonthQuery {
            year: Some(2024),
            month: Some(0),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ForkcastError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_export_import_between_profiles() {
    let (_source_dir, source) = create_test_planner().await;
    source
        .initialize_sample_data()
        .await
        .expect("Failed to seed");
    source
        .mark_cooked(&Id { id: 1 })
        .await
        .expect("Failed to mark cooked");
    source
        .generate_schedule(&GenerateSchedule::default())
        .await
        .expect("Failed to generate schedule");
    source
        .update_notification_settings(&UpdateNotificationSettings {
            enabled: Some(true),
            time: Some("17:45".to_string()),
            days: None,
        })
        .await
        .expect("Failed to update settings");

    let json = source
        .export_app_data()
        .await
        .expect("Failed to export")
        .to_json()
        .expect("Failed to serialize");
    assert!(json.contains("recipe-app-data"));

    let (_target_dir, target) = create_test_planner().await;
    target
        .create_recipe(&recipe("Toast", "Any", 5, false))
        .await
        .expect("Failed to create recipe");
    let document = AppDataDocument::from_json(&json).expect("Failed to parse");
    target
        .import_app_data(document.clone())
        .await
        .expect("Failed to import");

    let recipes = target
        .list_recipes(&ListRecipes::default())
        .await
        .expect("Failed to list");
    assert_eq!(recipes.len(), 5);
    assert!(recipes.iter().all(|r| r.name != "Toast"));

    let exported_again = target.export_app_data().await.expect("Failed to export");
    assert_eq!(exported_again, document);

    // Seeding never touches a non-empty catalog
    assert_eq!(
        target
            .initialize_sample_data()
            .await
            .expect("Failed to seed"),
        0
    );
}

#[tokio::test]
async fn test_reminder_for_stored_week() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .create_recipe(&recipe("Shakshuka", "Middle Eastern", 25, false))
        .await
        .expect("Failed to create recipe");
    planner
        .generate_schedule(&GenerateSchedule::default())
        .await
        .expect("Failed to generate schedule");
    let settings = planner
        .update_notification_settings(&UpdateNotificationSettings {
            enabled: Some(true),
            time: Some("08:15".to_string()),
            days: Some(vec![Day::Monday, Day::Tuesday]),
        })
        .await
        .expect("Failed to update settings");

    let week = planner
        .get_schedule()
        .await
        .expect("Failed to read schedule");
    // 2024-03-04 is a Monday
    let now = "2024-03-04T08:15:00Z"
        .parse::<Timestamp>()
        .expect("timestamp")
        .to_zoned(TimeZone::UTC);

    let reminder = reminder_due(&settings, &now, week.as_ref()).expect("reminder due");
    assert_eq!(reminder.recipe_name, "Shakshuka");
    assert_eq!(reminder.body(), "Today you have to cook 'Shakshuka'");
}

#[tokio::test]
async fn test_generate_schedule_saves_budgets_with_week() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .create_recipe(&recipe("Pad Thai", "Thai", 30, false))
        .await
        .expect("Failed to create recipe");

    // A one-off override leaves the preferences alone
    planner
        .generate_schedule(&GenerateSchedule {
            budgets: BTreeMap::from([(Day::Monday, 50)]),
            seed: Some(1),
            save_budgets: false,
        })
        .await
        .expect("Failed to generate schedule");
    let budgets = planner.get_budgets().await.expect("Failed to read budgets");
    assert_eq!(budgets.get(Day::Monday), Some(30));

    let week = planner
        .generate_schedule(&GenerateSchedule {
            budgets: BTreeMap::from([(Day::Monday, 50)]),
            seed: Some(1),
            save_budgets: true,
        })
        .await
        .expect("Failed to generate schedule");
    let budgets = planner.get_budgets().await.expect("Failed to read budgets");
    assert_eq!(budgets.get(Day::Monday), Some(50));
    assert_eq!(week.get(Day::Monday).map(|a| a.cooking_time), Some(50));

    // A rejected run stores neither the budgets nor the week
    let err = planner
        .generate_schedule(&GenerateSchedule {
            budgets: BTreeMap::from([(Day::Tuesday, 0)]),
            seed: Some(1),
            save_budgets: true,
        })
        .await
        .expect_err("zero budget is rejected");
    assert!(matches!(err, ForkcastError::InvalidConfiguration { .. }));
    assert_eq!(
        planner.get_budgets().await.expect("Failed to read budgets"),
        budgets
    );
    assert_eq!(
        planner.get_schedule().await.expect("Failed to read schedule"),
        Some(week)
    );
}
