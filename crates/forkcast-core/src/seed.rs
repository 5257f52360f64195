//! Sample catalog for first-time setup.

use crate::models::{Difficulty, RecipeDraft};

struct Sample {
    name: &'static str,
    cuisine: &'static str,
    cooking_time: u32,
    difficulty: Difficulty,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    tags: &'static [&'static str],
    is_special: bool,
}

const SAMPLES: [Sample; 5] = [
    Sample {
        name: "Spaghetti Carbonara",
        cuisine: "Italian",
        cooking_time: 25,
        difficulty: Difficulty::Medium,
        ingredients: &["Spaghetti", "Eggs", "Pancetta", "Parmesan cheese", "Black pepper", "Salt"],
        instructions: &[
            "Boil spaghetti in salted water",
            "Cook pancetta until crispy",
            "Beat eggs with parmesan",
            "Combine pasta with egg mixture",
            "Add pancetta and serve",
        ],
        tags: &["pasta", "quick", "classic"],
        is_special: false,
    },
    Sample {
        name: "Chicken Tikka Masala",
        cuisine: "Indian",
        cooking_time: 45,
        difficulty: Difficulty::Medium,
        ingredients: &["Chicken breast", "Yogurt", "Spices", "Tomato sauce", "Cream", "Rice"],
        instructions: &[
            "Marinate chicken in yogurt and spices",
            "Grill chicken until charred",
            "Make tomato-based sauce",
            "Add chicken to sauce",
            "Serve with rice",
        ],
        tags: &["curry", "spicy", "popular"],
        is_special: true,
    },
    Sample {
        name: "Caesar Salad",
        cuisine: "American",
        cooking_time: 15,
        difficulty: Difficulty::Easy,
        ingredients: &["Romaine lettuce", "Croutons", "Parmesan cheese", "Caesar dressing", "Lemon"],
        instructions: &[
            "Wash and chop lettuce",
            "Make croutons",
            "Prepare dressing",
            "Toss all ingredients",
            "Serve immediately",
        ],
        tags: &["salad", "healthy", "quick"],
        is_special: false,
    },
    Sample {
        name: "Beef Stir Fry",
        cuisine: "Chinese",
        cooking_time: 20,
        difficulty: Difficulty::Easy,
        ingredients: &["Beef strips", "Broccoli", "Soy sauce", "Garlic", "Ginger", "Rice"],
        instructions: &[
            "Marinate beef in soy sauce",
            "Stir fry beef until browned",
            "Add vegetables",
            "Add sauce and seasonings",
            "Serve over rice",
        ],
        tags: &["stir-fry", "quick", "healthy"],
        is_special: false,
    },
    Sample {
        name: "Chocolate Lava Cake",
        cuisine: "French",
        cooking_time: 30,
        difficulty: Difficulty::Hard,
        ingredients: &["Dark chocolate", "Butter", "Eggs", "Sugar", "Flour", "Vanilla"],
        instructions: &[
            "Melt chocolate and butter",
            "Mix with eggs and sugar",
            "Add flour and vanilla",
            "Bake in ramekins",
            "Serve warm",
        ],
        tags: &["dessert", "chocolate", "romantic"],
        is_special: true,
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// The five recipes `forkcast init` puts into an empty catalog.
pub fn sample_recipes() -> Vec<RecipeDraft> {
    SAMPLES
        .iter()
        .map(|sample| RecipeDraft {
            name: sample.name.to_string(),
            cuisine: sample.cuisine.to_string(),
            cooking_time: sample.cooking_time,
            difficulty: sample.difficulty,
            ingredients: owned(sample.ingredients),
            instructions: owned(sample.instructions),
            tags: owned(sample.tags),
            image: None,
            is_special: sample.is_special,
        })
        .collect()
}
