//! Data models for recipes, schedules, photos and reminders.
//!
//! This module contains the domain types of the forkcast recipe planner.
//! Display implementations for these models live in [`crate::display::models`]
//! so that data structures and presentation stay separate.
//!
//! # Weeks
//!
//! Every week-shaped value ([`DayBudgets`], [`WeekSchedule`],
//! [`NotificationSettings::days`]) is keyed by [`Day`], which orders Monday
//! first. Iterating any of them yields days in that order.
//!
//! # Examples
//!
//! ```rust
//! use forkcast_core::models::{Day, DayAssignment, DayBudgets, Difficulty, Recipe};
//!
//! let budgets = DayBudgets::default();
//! assert_eq!(budgets.get(Day::Monday), Some(30));
//! assert_eq!(budgets.get(Day::Sunday), Some(60));
//!
//! let recipe = Recipe {
//!     id: 1,
//!     name: "Beef Stir Fry".to_string(),
//!     cuisine: "Chinese".to_string(),
//!     cooking_time: 20,
//!     difficulty: Difficulty::Easy,
//!     ingredients: vec!["Beef strips".to_string()],
//!     instructions: vec!["Stir fry".to_string()],
//!     tags: vec![],
//!     image: None,
//!     is_special: false,
//!     last_cooked: None,
//! };
//! assert!(recipe.fits(30));
//!
//! let monday = DayAssignment::with_recipe(30, recipe);
//! println!("{}", monday.suggested_recipe.unwrap());
//! ```

pub mod app_data;
pub mod budget;
pub mod dashboard;
pub mod day;
pub mod filters;
pub mod notification;
pub mod photo;
pub mod recipe;
pub mod requests;
pub mod schedule;


pub use app_data::{AppData, AppDataDocument, APP_DATA_KEY};
pub use budget::{DayBudgets, DEFAULT_WEEKDAY_MINUTES, DEFAULT_WEEKEND_MINUTES};
pub use dashboard::Dashboard;
pub use day::Day;
pub use filters::RecipeFilter;
pub use notification::{NotificationSettings, Reminder, ReminderTime};
pub use photo::{MonthlyPhoto, MonthlyStats};
pub use recipe::{Difficulty, Recipe};
pub use requests::{RecipeChanges, RecipeDraft};
pub use schedule::{DayAssignment, WeekSchedule};
