//! Command handlers for the terminal interface.
//!
//! Each handler converts clap arguments into core parameters, calls the
//! planner and renders the markdown the core display types produce.

use std::{fs, time::Duration};

use anyhow::{bail, Context, Result};
use forkcast_core::{
    display::OperationStatus,
    models::AppDataDocument,
    notify::Notifier,
    params::{DeleteRecipe, Id, ListRecipes, MonthQuery},
    Planner, ReminderScheduler,
};
use jiff::Zoned;
use log::debug;
use tokio::signal::unix::{signal, SignalKind};

use crate::{
    args::{
        BudgetCommands, ExportArgs, ImportArgs, NotifyCommands, PhotoCommands, RecipeCommands,
        ScheduleCommands,
    },
    renderer::{TerminalNotifier, TerminalRenderer},
};

/// Runs one CLI command against a planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_recipe_command(&self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::Add(args) => {
                let recipe = self
                    .planner
                    .create_recipe_result(&args.into())
                    .await
                    .context("Failed to add recipe")?;
                self.renderer.render(&recipe.to_string())
            }
            RecipeCommands::List(args) => self.list_recipes(&args.into()).await,
            RecipeCommands::Show(args) => self.show_recipe(&args.into()).await,
            RecipeCommands::Edit(args) => {
                let id = args.id;
                let updated = self
                    .planner
                    .update_recipe_result(&args.into())
                    .await
                    .context("Failed to edit recipe")?;
                match updated {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => bail!("Recipe with ID {id} not found"),
                }
            }
            RecipeCommands::Delete(args) => self.delete_recipe(&args.into()).await,
            RecipeCommands::Cooked(args) => {
                let recipe = self
                    .planner
                    .mark_cooked(&args.into())
                    .await
                    .context("Failed to record cooking")?;
                let status = OperationStatus::success(format!(
                    "Marked '{}' as cooked",
                    recipe.name
                ));
                self.renderer.render(&status.to_string())
            }
            RecipeCommands::Cuisines => {
                let cuisines = self
                    .planner
                    .list_cuisines()
                    .await
                    .context("Failed to list cuisines")?;
                let mut output = String::from("# Cuisines\n\n");
                if cuisines.is_empty() {
                    output.push_str("No cuisines found.\n");
                }
                for cuisine in cuisines {
                    output.push_str(&format!("- {cuisine}\n"));
                }
                self.renderer.render(&output)
            }
        }
    }

    pub async fn list_recipes(&self, params: &ListRecipes) -> Result<()> {
        let recipes = self
            .planner
            .list_recipes_display(params)
            .await
            .context("Failed to list recipes")?;
        self.renderer.render(&recipes.to_string())
    }

    async fn show_recipe(&self, params: &Id) -> Result<()> {
        match self
            .planner
            .get_recipe(params)
            .await
            .context("Failed to get recipe")?
        {
            Some(recipe) => self.renderer.render(&recipe.to_string()),
            None => bail!("Recipe with ID {} not found", params.id),
        }
    }

    async fn delete_recipe(&self, params: &DeleteRecipe) -> Result<()> {
        if !params.confirmed {
            bail!(
                "Deleting recipe {} is permanent; pass --confirm to proceed",
                params.id
            );
        }
        match self
            .planner
            .delete_recipe_result(params)
            .await
            .context("Failed to delete recipe")?
        {
            Some(result) => self.renderer.render(&result.to_string()),
            None => bail!("Recipe with ID {} not found", params.id),
        }
    }

    pub async fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Generate(args) => {
                let week = self
                    .planner
                    .generate_schedule(&args.into())
                    .await
                    .context("Failed to generate schedule")?;
                self.renderer.render(&week.to_string())
            }
            ScheduleCommands::Show => {
                let week = self
                    .planner
                    .get_schedule()
                    .await
                    .context("Failed to read schedule")?;
                match week {
                    Some(week) => self.renderer.render(&week.to_string()),
                    None => self.renderer.render(
                        "No schedule yet. Run `forkcast schedule generate` to plan a week.\n",
                    ),
                }
            }
            ScheduleCommands::Today => {
                let today = self
                    .planner
                    .todays_recipe(&Zoned::now())
                    .await
                    .context("Failed to read schedule")?;
                match today {
                    Some((day, recipe)) => {
                        self.renderer
                            .render(&format!("**Today ({day})**\n\n{recipe}"))
                    }
                    None => self.renderer.render("Nothing planned for today.\n"),
                }
            }
        }
    }

    pub async fn handle_budget_command(&self, command: BudgetCommands) -> Result<()> {
        let budgets = match command {
            BudgetCommands::Show => self
                .planner
                .get_budgets()
                .await
                .context("Failed to read cooking times")?,
            BudgetCommands::Set(args) => self
                .planner
                .set_budgets(&args.into())
                .await
                .context("Failed to save cooking times")?,
        };
        self.renderer.render(&budgets.to_string())
    }

    pub async fn handle_photo_command(&self, command: PhotoCommands) -> Result<()> {
        match command {
            PhotoCommands::Add(args) => {
                let photo = self
                    .planner
                    .add_photo_result(&args.into())
                    .await
                    .context("Failed to add photo")?;
                self.renderer.render(&photo.to_string())
            }
            PhotoCommands::List(args) => {
                let photos = self
                    .planner
                    .photos_display(&args.into())
                    .await
                    .context("Failed to list photos")?;
                self.renderer.render(&photos.to_string())
            }
            PhotoCommands::Delete(args) => {
                let params: Id = args.into();
                match self
                    .planner
                    .delete_photo_result(&params)
                    .await
                    .context("Failed to delete photo")?
                {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => bail!("Photo with ID {} not found", params.id),
                }
            }
            PhotoCommands::Review(args) => {
                let review = self
                    .planner
                    .monthly_review(&MonthQuery::from(args))
                    .await
                    .context("Failed to build monthly review")?;
                self.renderer.render(&review.to_string())
            }
        }
    }

    pub async fn handle_notify_command(&self, command: NotifyCommands) -> Result<()> {
        match command {
            NotifyCommands::Show => {
                let settings = self
                    .planner
                    .get_notification_settings()
                    .await
                    .context("Failed to read reminder settings")?;
                self.renderer.render(&settings.to_string())
            }
            NotifyCommands::Set(args) => {
                let settings = self
                    .planner
                    .update_notification_settings(&args.into())
                    .await
                    .context("Failed to save reminder settings")?;
                self.renderer.render(&settings.to_string())
            }
            NotifyCommands::Watch(args) => {
                self.watch(TerminalNotifier, Duration::from_secs(args.interval_secs.max(1)))
                    .await
            }
        }
    }

    /// Checks for reminders until SIGINT or SIGTERM.
    async fn watch<N: Notifier>(&self, notifier: N, period: Duration) -> Result<()> {
        let settings = self
            .planner
            .get_notification_settings()
            .await
            .context("Failed to read reminder settings")?;
        if !settings.enabled {
            let status = OperationStatus::failure(
                "Reminders are disabled; enable them with `forkcast notify set --enable`",
            );
            self.renderer.render(&status.to_string())?;
        }
        self.renderer.render(&format!(
            "Watching for reminders at {} every {}s. Press Ctrl-C to stop.\n",
            settings.time,
            period.as_secs()
        ))?;

        let scheduler = ReminderScheduler::start(self.planner.clone(), notifier, period);

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::select! {
            _ = sigint.recv() => debug!("Received SIGINT"),
            _ = sigterm.recv() => debug!("Received SIGTERM"),
        }

        scheduler.stop().await;
        Ok(())
    }

    pub async fn init(&self) -> Result<()> {
        let inserted = self
            .planner
            .initialize_sample_data()
            .await
            .context("Failed to add sample recipes")?;
        let status = if inserted > 0 {
            OperationStatus::success(format!("Added {inserted} sample recipes"))
        } else {
            OperationStatus::failure("Catalog already has recipes; nothing added")
        };
        self.renderer.render(&status.to_string())
    }

    pub async fn export(&self, args: ExportArgs) -> Result<()> {
        let json = self
            .planner
            .export_app_data()
            .await
            .context("Failed to export data")?
            .to_json()?;

        match args.file {
            Some(path) => {
                fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                let status = OperationStatus::success(format!("Exported to {}", path.display()));
                self.renderer.render(&status.to_string())
            }
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    pub async fn import(&self, args: ImportArgs) -> Result<()> {
        if !args.confirm {
            bail!("Importing replaces all existing data; pass --confirm to proceed");
        }
        let json = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let document = AppDataDocument::from_json(&json)
            .with_context(|| format!("{} is not a forkcast export", args.file.display()))?;
        let recipes = document.app_data.recipes.len();

        self.planner
            .import_app_data(document)
            .await
            .context("Failed to import data")?;
        let status = OperationStatus::success(format!(
            "Imported {recipes} recipes from {}",
            args.file.display()
        ));
        self.renderer.render(&status.to_string())
    }

    pub async fn dashboard(&self) -> Result<()> {
        let dashboard = self
            .planner
            .dashboard(&Zoned::now())
            .await
            .context("Failed to build dashboard")?;
        self.renderer.render(&dashboard.to_string())
    }
}

