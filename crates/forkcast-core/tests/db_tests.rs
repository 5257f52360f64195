use std::collections::BTreeMap;

use forkcast_core::{
    models::{
        AppData, Day, DayAssignment, DayBudgets, Difficulty, NotificationSettings, RecipeChanges,
        RecipeDraft, RecipeFilter, WeekSchedule,
    },
    seed, Database, ForkcastError,
};
use jiff::{civil::date, Timestamp};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn draft(name: &str, cuisine: &str, cooking_time: u32, is_special: bool) -> RecipeDraft {
    RecipeDraft {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        cooking_time,
        difficulty: Difficulty::Medium,
        ingredients: vec!["Eggs".to_string()],
        instructions: vec!["Whisk".to_string()],
        tags: vec![],
        image: None,
        is_special,
    }
}

/// A week with `recipe_id`'s recipe on Monday and nothing else.
fn monday_only(db: &Database, recipe_id: u64) -> WeekSchedule {
    let recipe = db
        .get_recipe(recipe_id)
        .expect("Failed to get recipe")
        .expect("Recipe should exist");
    let mut days = BTreeMap::new();
    for day in Day::ALL {
        days.insert(day, DayAssignment::empty(30));
    }
    days.insert(Day::Monday, DayAssignment::with_recipe(30, recipe));
    WeekSchedule {
        generated_at: Timestamp::from_second(1_709_510_400).expect("valid timestamp"),
        days,
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.schema_version().expect("Failed to read version"), 1);
    assert_eq!(db.count_recipes().expect("Failed to count"), 0);
    assert!(db.get_schedule().expect("Failed to read schedule").is_none());
}

#[test]
fn test_reopening_keeps_data() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).expect("Failed to open");
        db.create_recipe(draft("Omelette", "French", 10, false))
            .expect("Failed to create recipe");
    }
    let db = Database::new(temp_file.path()).expect("Failed to reopen");
    assert_eq!(db.count_recipes().expect("Failed to count"), 1);
}

#[test]
fn test_recipe_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let mut input = draft("Chicken Tikka Masala", "Indian", 45, true);
    input.tags = vec!["curry".to_string(), "spicy".to_string()];
    input.image = Some("tikka.jpg".to_string());
    let created = db.create_recipe(input).expect("Failed to create recipe");
    assert!(created.id > 0);

    let loaded = db
        .get_recipe(created.id)
        .expect("Failed to get recipe")
        .expect("Recipe should exist");
    assert_eq!(loaded, created);
    assert!(db.get_recipe(created.id + 100).expect("query").is_none());
}

#[test]
fn test_list_recipes_filters() {
    let (_temp_file, mut db) = create_test_db();
    db.create_recipe(draft("Spaghetti Carbonara", "Italian", 25, false))
        .expect("create");
    db.create_recipe(draft("Chicken Tikka Masala", "Indian", 45, true))
        .expect("create");
    let mut salad = draft("Caesar Salad", "American", 15, false);
    salad.difficulty = Difficulty::Easy;
    db.create_recipe(salad).expect("create");

    let names = |filter: RecipeFilter| -> Vec<String> {
        db.list_recipes(Some(&filter))
            .expect("Failed to list")
            .into_iter()
            .map(|r| r.name)
            .collect()
    };

    assert_eq!(db.list_recipes(None).expect("list").len(), 3);
    assert_eq!(
        names(RecipeFilter {
            search: Some("SALAD".to_string()),
            ..Default::default()
        }),
        vec!["Caesar Salad"]
    );
    // Search also matches cuisine
    assert_eq!(
        names(RecipeFilter {
            search: Some("ital".to_string()),
            ..Default::default()
        }),
        vec!["Spaghetti Carbonara"]
    );
    assert_eq!(
        names(RecipeFilter {
            cuisine: Some("Indian".to_string()),
            ..Default::default()
        }),
        vec!["Chicken Tikka Masala"]
    );
    assert_eq!(
        names(RecipeFilter {
            difficulty: Some(Difficulty::Easy),
            ..Default::default()
        }),
        vec!["Caesar Salad"]
    );
    assert_eq!(
        names(RecipeFilter {
            special: Some(false),
            ..Default::default()
        }),
        vec!["Spaghetti Carbonara", "Caesar Salad"]
    );

    assert_eq!(
        db.list_cuisines().expect("Failed to list cuisines"),
        vec!["American", "Indian", "Italian"]
    );
}

#[test]
fn test_update_recipe() {
    let (_temp_file, mut db) = create_test_db();
    let recipe = db
        .create_recipe(draft("Beef Stir Fry", "Chinese", 20, false))
        .expect("create");

    let (updated, changes) = db
        .update_recipe(
            recipe.id,
            RecipeChanges {
                tags: Some(vec!["quick".to_string()]),
                is_special: Some(true),
                ..Default::default()
            },
        )
        .expect("Failed to update")
        .expect("Recipe should exist");

    assert_eq!(changes.len(), 2);
    assert!(updated.is_special);
    let loaded = db.get_recipe(recipe.id).expect("get").expect("exists");
    assert_eq!(loaded, updated);

    assert!(db
        .update_recipe(999, RecipeChanges::default())
        .expect("update")
        .is_none());
}

#[test]
fn test_mark_cooked() {
    let (_temp_file, mut db) = create_test_db();
    let recipe = db
        .create_recipe(draft("Beef Stir Fry", "Chinese", 20, false))
        .expect("create");
    let at: Timestamp = "2024-03-04T18:00:00Z".parse().expect("timestamp");

    let cooked = db.mark_cooked(recipe.id, at).expect("Failed to mark cooked");
    assert_eq!(cooked.last_cooked, Some(at));

    let err = db.mark_cooked(77, at).unwrap_err();
    assert!(matches!(err, ForkcastError::RecipeNotFound { id: 77 }));
}

#[test]
fn test_seed_only_into_empty_catalog() {
    let (_temp_file, mut db) = create_test_db();

    let inserted = db
        .seed_recipes(seed::sample_recipes())
        .expect("Failed to seed");
    assert_eq!(inserted, 5);

    let again = db
        .seed_recipes(seed::sample_recipes())
        .expect("Failed to seed");
    assert_eq!(again, 0);
    assert_eq!(db.count_recipes().expect("count"), 5);

    let specials = db
        .list_recipes(Some(&RecipeFilter {
            special: Some(true),
            ..Default::default()
        }))
        .expect("list");
    assert_eq!(specials.len(), 2);
}

#[test]
fn test_save_schedule_replaces_previous_week() {
    let (_temp_file, mut db) = create_test_db();
    let first = db.create_recipe(draft("Omelette", "French", 10, false)).expect("create");
    let second = db.create_recipe(draft("Pancakes", "American", 20, false)).expect("create");

    db.save_schedule(&monday_only(&db, first.id)).expect("save");
    let replacement = monday_only(&db, second.id);
    db.save_schedule(&replacement).expect("save");

    let stored = db.get_schedule().expect("get").expect("stored");
    assert_eq!(stored, replacement);
    assert_eq!(stored.planned_days(), 1);
    assert_eq!(stored.days.len(), 7);
}

#[test]
fn test_deleting_recipe_empties_its_day() {
    let (_temp_file, mut db) = create_test_db();
    let recipe = db.create_recipe(draft("Omelette", "French", 10, false)).expect("create");
    db.save_schedule(&monday_only(&db, recipe.id)).expect("save");

    let deleted = db.delete_recipe(recipe.id).expect("Failed to delete");
    assert_eq!(deleted.map(|r| r.id), Some(recipe.id));

    let stored = db.get_schedule().expect("get").expect("still stored");
    assert!(stored.recipe_for(Day::Monday).is_none());
    assert_eq!(stored.get(Day::Monday).map(|a| a.cooking_time), Some(30));

    assert!(db.delete_recipe(recipe.id).expect("delete").is_none());
}

#[test]
fn test_photos_by_month() {
    let (_temp_file, mut db) = create_test_db();
    db.add_photo(date(2024, 2, 29), "Caesar Salad", "feb.jpg", None)
        .expect("add");
    let march_late = db
        .add_photo(date(2024, 3, 31), "Beef Stir Fry", "late.jpg", Some("crispy"))
        .expect("add");
    let march_early = db
        .add_photo(date(2024, 3, 1), "Spaghetti Carbonara", "early.jpg", None)
        .expect("add");

    let march = db.list_photos(2024, 3).expect("Failed to list photos");
    let ids: Vec<u64> = march.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![march_early.id, march_late.id]);
    assert_eq!(march[1].notes.as_deref(), Some("crispy"));

    assert_eq!(db.list_photos(2024, 2).expect("list").len(), 1);
    assert!(db.list_photos(2024, 4).expect("list").is_empty());

    let removed = db.delete_photo(march_late.id).expect("delete");
    assert_eq!(removed, Some(march_late.clone()));
    assert!(db.get_photo(march_late.id).expect("get").is_none());
    assert!(db.delete_photo(march_late.id).expect("delete").is_none());
}

#[test]
fn test_settings_defaults_and_updates() {
    let (_temp_file, mut db) = create_test_db();

    assert_eq!(db.get_budgets().expect("get"), DayBudgets::default());
    assert_eq!(
        db.get_notification_settings().expect("get"),
        NotificationSettings::default()
    );

    let budgets = DayBudgets::default().with(Day::Friday, 45);
    db.set_budgets(&budgets).expect("set");
    assert_eq!(db.get_budgets().expect("get"), budgets);

    let settings = NotificationSettings {
        enabled: true,
        ..Default::default()
    };
    db.set_notification_settings(&settings).expect("set");
    assert_eq!(db.get_notification_settings().expect("get"), settings);
}

#[test]
fn test_export_import_round_trip() {
    let (_temp_file, mut source) = create_test_db();
    source.seed_recipes(seed::sample_recipes()).expect("seed");
    source
        .mark_cooked(2, "2024-03-02T19:00:00Z".parse().expect("timestamp"))
        .expect("cooked");
    source
        .add_photo(date(2024, 3, 2), "Chicken Tikka Masala", "tikka.jpg", None)
        .expect("photo");
    source
        .set_budgets(&DayBudgets::default().with(Day::Monday, 20))
        .expect("budgets");
    let week = monday_only(&source, 3);
    source.save_schedule(&week).expect("schedule");

    let exported = source.export_app_data().expect("Failed to export");
    assert_eq!(exported.recipes.len(), 5);
    assert_eq!(exported.weekly_schedule.as_ref(), Some(&week));

    let (_other_file, mut target) = create_test_db();
    target
        .create_recipe(draft("Leftovers", "Any", 5, false))
        .expect("create");
    target.import_app_data(&exported).expect("Failed to import");

    let reimported = target.export_app_data().expect("Failed to export");
    assert_eq!(reimported, exported);
}

#[test]
fn test_import_drops_unknown_schedule_recipes() {
    let (_temp_file, mut db) = create_test_db();
    let recipe = db.create_recipe(draft("Omelette", "French", 10, false)).expect("create");
    let week = monday_only(&db, recipe.id);

    let data = AppData {
        recipes: vec![],
        weekly_schedule: Some(week),
        ..Default::default()
    };
    db.import_app_data(&data).expect("Failed to import");

    assert_eq!(db.count_recipes().expect("count"), 0);
    let stored = db.get_schedule().expect("get").expect("stored");
    assert_eq!(stored.planned_days(), 0);
}

/// Exported data with one seeded recipe on Monday, ready to be tampered with.
fn exported_with_monday(db: &mut Database) -> AppData {
    db.seed_recipes(seed::sample_recipes()).expect("seed");
    let week = monday_only(db, 3);
    db.save_schedule(&week).expect("schedule");
    db.export_app_data().expect("Failed to export")
}

fn assert_rejected_on(result: forkcast_core::Result<()>, expected_field: &str) {
    match result {
        Err(ForkcastError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected invalid input on {expected_field}, got {other:?}"),
    }
}

#[test]
fn test_import_rejects_malformed_recipes() {
    let (_source_file, mut source) = create_test_db();
    let exported = exported_with_monday(&mut source);

    let (_temp_file, mut db) = create_test_db();
    let kept = db.create_recipe(draft("Leftovers", "Any", 5, false)).expect("create");

    let mut blank_name = exported.clone();
    blank_name.recipes[0].name = "   ".to_string();
    assert_rejected_on(db.import_app_data(&blank_name), "recipes[1].name");

    let mut no_ingredients = exported.clone();
    no_ingredients.recipes[1].ingredients = vec![" ".to_string()];
    assert_rejected_on(db.import_app_data(&no_ingredients), "recipes[2].ingredients");

    let mut zero_time = exported.clone();
    zero_time.recipes[4].cooking_time = 0;
    assert_rejected_on(db.import_app_data(&zero_time), "recipes[5].cooking_time");

    let mut repeated_id = exported;
    repeated_id.recipes[1].id = 1;
    assert_rejected_on(db.import_app_data(&repeated_id), "recipes");

    // Nothing was replaced
    let recipes = db.list_recipes(None).expect("list");
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, kept.id);
}

#[test]
fn test_import_normalizes_recipe_text() {
    let (_temp_file, mut db) = create_test_db();
    let mut data = exported_with_monday(&mut db);
    data.recipes[0].name = "  Carbonara ".to_string();
    data.recipes[0].tags = vec!["pasta".to_string(), " pasta".to_string(), String::new()];
    data.recipes[0].instructions.push("  ".to_string());

    db.import_app_data(&data).expect("Failed to import");

    let recipe = db.get_recipe(1).expect("get").expect("recipe exists");
    assert_eq!(recipe.name, "Carbonara");
    assert_eq!(recipe.tags, vec!["pasta".to_string()]);
    assert!(recipe.instructions.iter().all(|step| !step.trim().is_empty()));
}

#[test]
fn test_import_rejects_incomplete_week() {
    let (_temp_file, mut db) = create_test_db();
    let mut data = exported_with_monday(&mut db);
    let before = db.get_schedule().expect("get");

    let week = data.weekly_schedule.as_mut().expect("exported week");
    week.days.retain(|day, _| *day == Day::Monday);
    assert_eq!(week.days.len(), 1);

    assert_rejected_on(db.import_app_data(&data), "weekly_schedule");
    assert_eq!(db.get_schedule().expect("get"), before);
}

#[test]
fn test_import_rejects_week_breaking_schedule_rules() {
    let (_temp_file, mut db) = create_test_db();
    let data = exported_with_monday(&mut db);
    let recipe = |id: u64| {
        data.recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .expect("seeded recipe")
    };
    let with_day = |day: Day, assignment: DayAssignment| {
        let mut broken = data.clone();
        broken
            .weekly_schedule
            .as_mut()
            .expect("exported week")
            .days
            .insert(day, assignment);
        broken
    };

    // Chicken Tikka Masala is special and must stay on the weekend
    let special_on_weekday = with_day(Day::Tuesday, DayAssignment::with_recipe(60, recipe(2)));
    assert_rejected_on(db.import_app_data(&special_on_weekday), "weekly_schedule");

    // Caesar Salad is already on Monday
    let repeated = with_day(Day::Wednesday, DayAssignment::with_recipe(30, recipe(3)));
    assert_rejected_on(db.import_app_data(&repeated), "weekly_schedule");

    // Chicken Tikka Masala takes 45 minutes
    let over_budget = with_day(Day::Saturday, DayAssignment::with_recipe(30, recipe(2)));
    assert_rejected_on(db.import_app_data(&over_budget), "weekly_schedule");

    let mut two_specials = with_day(Day::Saturday, DayAssignment::with_recipe(60, recipe(2)));
    two_specials
        .weekly_schedule
        .as_mut()
        .expect("exported week")
        .days
        .insert(Day::Sunday, DayAssignment::with_recipe(60, recipe(5)));
    assert_rejected_on(db.import_app_data(&two_specials), "weekly_schedule");

    let zero_budget = with_day(Day::Friday, DayAssignment::empty(0));
    assert_rejected_on(db.import_app_data(&zero_budget), "weekly_schedule");

    let one_special = with_day(Day::Saturday, DayAssignment::with_recipe(60, recipe(2)));
    db.import_app_data(&one_special).expect("Failed to import");
    let stored = db.get_schedule().expect("get").expect("stored");
    assert_eq!(stored.planned_days(), 2);
}

#[test]
fn test_save_schedule_with_budgets_stores_both() {
    let (_temp_file, mut db) = create_test_db();
    let recipe = db.create_recipe(draft("Omelette", "French", 10, false)).expect("create");
    let week = monday_only(&db, recipe.id);
    let budgets = DayBudgets::default().with(Day::Monday, 40);

    db.save_schedule_with_budgets(&week, Some(&budgets))
        .expect("Failed to save");
    assert_eq!(db.get_budgets().expect("get"), budgets);
    assert_eq!(db.get_schedule().expect("get"), Some(week.clone()));

    db.save_schedule_with_budgets(&week, None).expect("Failed to save");
    assert_eq!(db.get_budgets().expect("get"), budgets);
}
