//! Core library for the Forkcast recipe planner.
//!
//! Forkcast keeps a personal recipe catalog in a local SQLite file, generates
//! a weekly cooking schedule that fits each day's available cooking time,
//! logs photos of cooked dishes and reminds the user what to cook today.
//!
//! # Layout
//!
//! - [`schedule`]: the weekly schedule generator, a pure function over a
//!   recipe snapshot and per-day budgets
//! - [`models`]: domain types; [`display`] renders them as markdown
//! - [`db`]: SQLite persistence
//! - [`planner`]: async facade used by every interface
//! - [`notify`]: reminder matching and the background reminder scheduler
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use forkcast_core::{
//!     params::{GenerateSchedule, SetBudgets},
//!     models::Day,
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("forkcast.db"))
//!     .build()
//!     .await?;
//!
//! planner.initialize_sample_data().await?;
//! planner
//!     .set_budgets(&SetBudgets {
//!         budgets: [(Day::Friday, 45)].into_iter().collect(),
//!     })
//!     .await?;
//!
//! let week = planner.generate_schedule(&GenerateSchedule::default()).await?;
//! for (day, recipe) in week.planned() {
//!     println!("{day}: {}", recipe.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod params;
pub mod planner;
pub mod schedule;
pub mod seed;

pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, UpdateResult};
pub use error::{ForkcastError, Result};
pub use models::{Day, DayBudgets, Recipe, WeekSchedule};
pub use notify::{Notifier, ReminderScheduler};
pub use planner::{Planner, PlannerBuilder};
