//! Display formatting and result types.
//!
//! Domain models implement `Display` directly (see [`models`]) and produce
//! markdown. Collections and operation outcomes get small wrapper types so
//! every interface prints the same text:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers       │    │   Formatted     │
//! │ (Recipe, Week…) │───▶│ (Recipes,       │───▶│    Output       │
//! │                 │    │  CreateResult…) │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Recipes, Photos and the MonthlyReview
//! - [`results`]: CreateResult, UpdateResult, DeleteResult
//! - [`status`]: OperationStatus
//! - [`datetime`]: LocalDateTime
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use forkcast_core::{
//!     display::{OperationStatus, UpdateResult},
//!     models::{Difficulty, Recipe},
//! };
//!
//! let recipe = Recipe {
//!     id: 2,
//!     name: "Chicken Tikka Masala".to_string(),
//!     cuisine: "Indian".to_string(),
//!     cooking_time: 45,
//!     difficulty: Difficulty::Medium,
//!     ingredients: vec!["Chicken breast".to_string()],
//!     instructions: vec!["Grill chicken".to_string()],
//!     tags: vec![],
//!     image: None,
//!     is_special: true,
//!     last_cooked: None,
//! };
//!
//! let changes = vec!["Marked as special".to_string()];
//! let output = format!("{}", UpdateResult::with_changes(recipe, changes));
//! assert!(output.contains("Changes made:"));
//!
//! println!("{}", OperationStatus::success("Schedule generated"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{MonthlyReview, Photos, Recipes};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
