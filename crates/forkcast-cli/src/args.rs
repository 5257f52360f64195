//! Command-line argument definitions using clap.
//!
//! Argument structs carry clap attributes only and convert into the
//! interface-agnostic parameter types from [`forkcast_core::params`]:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::{collections::BTreeMap, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use forkcast_core::{models::Day, params::*, ReminderScheduler};

/// Personal recipe planner
///
/// Forkcast keeps a recipe catalog, plans a week of cooking that fits the
/// time you have each day, logs photos of what you cooked and reminds you
/// what's on the menu. Run without a command to see today's dashboard.
#[derive(Parser)]
#[command(version, about, name = "forkcast")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/forkcast/forkcast.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Forkcast CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the recipe catalog
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Generate and view the weekly schedule
    #[command(alias = "s")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// View and change cooking time per day
    #[command(alias = "b")]
    Budget {
        #[command(subcommand)]
        command: BudgetCommands,
    },
    /// Log cooking photos and review a month
    #[command(alias = "p")]
    Photo {
        #[command(subcommand)]
        command: PhotoCommands,
    },
    /// Configure and run "time to cook" reminders
    #[command(alias = "n")]
    Notify {
        #[command(subcommand)]
        command: NotifyCommands,
    },
    /// Add the sample recipes to an empty catalog
    Init,
    /// Export all data as JSON
    Export(ExportArgs),
    /// Replace all data with a JSON export
    Import(ImportArgs),
    /// Show today's recipe and a summary
    #[command(alias = "d")]
    Dashboard,
    /// Start the MCP server
    Serve,
}

// ============================================================================
// Recipes
// ============================================================================

/// Difficulty values accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for DifficultyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyArg::Easy => write!(f, "easy"),
            DifficultyArg::Medium => write!(f, "medium"),
            DifficultyArg::Hard => write!(f, "hard"),
        }
    }
}

/// Add a recipe to the catalog
///
/// Ingredients and instructions are given one per flag so they may contain
/// commas: `-i "Salt, to taste" -i Pepper -s "Season" -s "Cook"`.
#[derive(ClapArgs)]
pub struct AddRecipeArgs {
    /// Name of the dish
    pub name: String,
    #[arg(short = 'c', long, help = "Cuisine, e.g. Italian")]
    pub cuisine: String,
    #[arg(short = 't', long = "time", help = "Cooking time in minutes")]
    pub cooking_time: i64,
    #[arg(short, long, help = "How demanding the recipe is (default: medium)")]
    pub difficulty: Option<DifficultyArg>,
    #[arg(short = 'i', long = "ingredient", help = "An ingredient; repeat for each one")]
    pub ingredients: Vec<String>,
    #[arg(short = 's', long = "step", help = "An instruction; repeat for each step in order")]
    pub instructions: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "Tags as comma-separated list")]
    pub tags: Vec<String>,
    #[arg(long, help = "Image path or URL")]
    pub image: Option<String>,
    #[arg(long, help = "Reserve the recipe for weekends")]
    pub special: bool,
}

impl From<AddRecipeArgs> for CreateRecipe {
    fn from(val: AddRecipeArgs) -> Self {
        CreateRecipe {
            name: val.name,
            cuisine: val.cuisine,
            cooking_time: val.cooking_time,
            difficulty: val.difficulty.map(|d| d.to_string()),
            ingredients: val.ingredients,
            instructions: val.instructions,
            tags: val.tags,
            image: val.image,
            is_special: val.special,
        }
    }
}

/// List recipes, optionally filtered
#[derive(ClapArgs)]
pub struct ListRecipesArgs {
    /// Text matched against name and cuisine, ignoring case
    pub search: Option<String>,
    #[arg(short, long, help = "Only this cuisine")]
    pub cuisine: Option<String>,
    #[arg(short, long, help = "Only this difficulty")]
    pub difficulty: Option<DifficultyArg>,
    #[arg(long, conflicts_with = "regular", help = "Only special recipes")]
    pub special: bool,
    #[arg(long, help = "Only regular (non-special) recipes")]
    pub regular: bool,
}

impl From<ListRecipesArgs> for ListRecipes {
    fn from(val: ListRecipesArgs) -> Self {
        let special = match (val.special, val.regular) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        ListRecipes {
            search: val.search,
            cuisine: val.cuisine,
            difficulty: val.difficulty.map(|d| d.to_string()),
            special,
        }
    }
}

/// Identifies a recipe or photo by ID
#[derive(ClapArgs)]
pub struct IdArgs {
    #[arg(help = "Unique identifier")]
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit a recipe. Only the given fields change.
#[derive(ClapArgs)]
pub struct EditRecipeArgs {
    #[arg(help = "Unique identifier of the recipe to edit")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New cuisine")]
    pub cuisine: Option<String>,
    #[arg(short = 't', long = "time", help = "New cooking time in minutes")]
    pub cooking_time: Option<i64>,
    #[arg(short, long, help = "New difficulty")]
    pub difficulty: Option<DifficultyArg>,
    #[arg(short = 'i', long = "ingredient", help = "Replace ingredients; repeat for each one")]
    pub ingredients: Option<Vec<String>>,
    #[arg(short = 's', long = "step", help = "Replace instructions; repeat for each step")]
    pub instructions: Option<Vec<String>>,
    #[arg(long, value_delimiter = ',', help = "Replace tags, comma-separated")]
    pub tags: Option<Vec<String>>,
    #[arg(long, help = "New image path or URL")]
    pub image: Option<String>,
    #[arg(long, help = "Set or clear the weekend-only flag (true/false)")]
    pub special: Option<bool>,
}

impl From<EditRecipeArgs> for UpdateRecipe {
    fn from(val: EditRecipeArgs) -> Self {
        UpdateRecipe {
            id: val.id,
            name: val.name,
            cuisine: val.cuisine,
            cooking_time: val.cooking_time,
            difficulty: val.difficulty.map(|d| d.to_string()),
            ingredients: val.ingredients,
            instructions: val.instructions,
            tags: val.tags,
            image: val.image,
            is_special: val.special,
        }
    }
}

/// Delete a recipe permanently
#[derive(ClapArgs)]
pub struct DeleteRecipeArgs {
    #[arg(help = "Unique identifier of the recipe to delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteRecipeArgs> for DeleteRecipe {
    fn from(val: DeleteRecipeArgs) -> Self {
        DeleteRecipe {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Add a recipe to the catalog
    #[command(alias = "a")]
    Add(AddRecipeArgs),
    /// List recipes
    #[command(aliases = ["l", "ls"])]
    List(ListRecipesArgs),
    /// Show a recipe with ingredients and instructions
    #[command(alias = "s")]
    Show(IdArgs),
    /// Edit a recipe
    #[command(alias = "e")]
    Edit(EditRecipeArgs),
    /// Delete a recipe permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteRecipeArgs),
    /// Record that a recipe was cooked now
    #[command(alias = "c")]
    Cooked(IdArgs),
    /// List the cuisines in the catalog
    Cuisines,
}

// ============================================================================
// Schedule and budgets
// ============================================================================

/// Parses `DAY=MINUTES`, e.g. `friday=45` or `sat=90`.
pub fn parse_day_minutes(value: &str) -> Result<(Day, i64), String> {
    let (day, minutes) = value
        .split_once('=')
        .ok_or_else(|| format!("expected DAY=MINUTES, got '{value}'"))?;
    let day = day.parse::<Day>()?;
    let minutes = minutes
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid minutes in '{value}'"))?;
    Ok((day, minutes))
}

/// Generate a new week from the catalog
#[derive(ClapArgs)]
pub struct GenerateScheduleArgs {
    #[arg(
        short,
        long = "budget",
        value_parser = parse_day_minutes,
        help = "Override one day's cooking time for this run, as DAY=MINUTES; repeatable"
    )]
    pub budgets: Vec<(Day, i64)>,
    #[arg(long, help = "Seed for a reproducible schedule")]
    pub seed: Option<u64>,
    #[arg(long, help = "Keep the overrides as the saved cooking times")]
    pub save: bool,
}

impl From<GenerateScheduleArgs> for GenerateSchedule {
    fn from(val: GenerateScheduleArgs) -> Self {
        GenerateSchedule {
            budgets: val.budgets.into_iter().collect::<BTreeMap<_, _>>(),
            seed: val.seed,
            save_budgets: val.save,
        }
    }
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Generate a new week, replacing the current one
    #[command(alias = "g")]
    Generate(GenerateScheduleArgs),
    /// Show the current week
    #[command(alias = "s")]
    Show,
    /// Show today's recipe
    #[command(alias = "t")]
    Today,
}

/// Change the saved cooking time of some days
#[derive(ClapArgs)]
pub struct SetBudgetsArgs {
    #[arg(
        required = true,
        value_parser = parse_day_minutes,
        help = "Cooking time as DAY=MINUTES, e.g. friday=45"
    )]
    pub budgets: Vec<(Day, i64)>,
}

impl From<SetBudgetsArgs> for SetBudgets {
    fn from(val: SetBudgetsArgs) -> Self {
        SetBudgets {
            budgets: val.budgets.into_iter().collect(),
        }
    }
}

#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the saved cooking time per day
    #[command(alias = "s")]
    Show,
    /// Change the cooking time of some days
    Set(SetBudgetsArgs),
}

// ============================================================================
// Photos
// ============================================================================

/// Log a photo of something you cooked
#[derive(ClapArgs)]
pub struct AddPhotoArgs {
    #[arg(help = "Name of the dish")]
    pub recipe_name: String,
    #[arg(help = "Image path or URL")]
    pub image: String,
    #[arg(short, long, help = "Notes about how it turned out")]
    pub notes: Option<String>,
    #[arg(short, long, help = "Date cooked as YYYY-MM-DD (default: today)")]
    pub date: Option<String>,
}

impl From<AddPhotoArgs> for AddPhoto {
    fn from(val: AddPhotoArgs) -> Self {
        AddPhoto {
            recipe_name: val.recipe_name,
            image: val.image,
            notes: val.notes,
            date: val.date,
        }
    }
}

/// Selects a month; defaults to the current one
#[derive(ClapArgs)]
pub struct MonthArgs {
    #[arg(short, long, help = "Four-digit year")]
    pub year: Option<i16>,
    #[arg(short, long, help = "Month, 1-12")]
    pub month: Option<i8>,
}

impl From<MonthArgs> for MonthQuery {
    fn from(val: MonthArgs) -> Self {
        MonthQuery {
            year: val.year,
            month: val.month,
        }
    }
}

#[derive(Subcommand)]
pub enum PhotoCommands {
    /// Log a cooking photo
    #[command(alias = "a")]
    Add(AddPhotoArgs),
    /// List a month's photos
    #[command(aliases = ["l", "ls"])]
    List(MonthArgs),
    /// Delete a photo
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// Monthly review: stats and photos
    #[command(alias = "r")]
    Review(MonthArgs),
}

// ============================================================================
// Reminders
// ============================================================================

/// Change reminder settings. Only the given fields change.
#[derive(ClapArgs)]
pub struct SetNotifyArgs {
    #[arg(long, conflicts_with = "disable", help = "Turn reminders on")]
    pub enable: bool,
    #[arg(long, help = "Turn reminders off")]
    pub disable: bool,
    #[arg(short, long, help = "Time of day as HH:MM")]
    pub time: Option<String>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Days to remind on, comma-separated (e.g. mon,wed,fri)"
    )]
    pub days: Option<Vec<Day>>,
}

impl From<SetNotifyArgs> for UpdateNotificationSettings {
    fn from(val: SetNotifyArgs) -> Self {
        let enabled = match (val.enable, val.disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        UpdateNotificationSettings {
            enabled,
            time: val.time,
            days: val.days,
        }
    }
}

/// Run reminder checks in the foreground until interrupted
#[derive(ClapArgs)]
pub struct WatchArgs {
    #[arg(
        long,
        default_value_t = ReminderScheduler::DEFAULT_PERIOD.as_secs(),
        help = "Seconds between checks"
    )]
    pub interval_secs: u64,
}

#[derive(Subcommand)]
pub enum NotifyCommands {
    /// Show reminder settings
    #[command(alias = "s")]
    Show,
    /// Change reminder settings
    Set(SetNotifyArgs),
    /// Check for due reminders until Ctrl-C
    #[command(alias = "w")]
    Watch(WatchArgs),
}

// ============================================================================
// Data
// ============================================================================

/// Export all data
#[derive(ClapArgs)]
pub struct ExportArgs {
    /// File to write; prints to stdout when omitted
    pub file: Option<PathBuf>,
}

/// Import data, replacing everything
#[derive(ClapArgs)]
pub struct ImportArgs {
    /// JSON file produced by `forkcast export`
    pub file: PathBuf,
    /// Confirm replacing all existing data
    #[arg(long)]
    pub confirm: bool,
}
