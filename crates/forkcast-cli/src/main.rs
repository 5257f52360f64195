//! Forkcast CLI Application
//!
//! Command-line interface and MCP server for the forkcast recipe planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use forkcast_core::PlannerBuilder;
use log::info;
use mcp::{run_stdio_server, ForkcastMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Forkcast started");

    match command {
        Some(Recipe { command }) => {
            Cli::new(planner, renderer)
                .handle_recipe_command(command)
                .await
        }
        Some(Schedule { command }) => {
            Cli::new(planner, renderer)
                .handle_schedule_command(command)
                .await
        }
        Some(Budget { command }) => {
            Cli::new(planner, renderer)
                .handle_budget_command(command)
                .await
        }
        Some(Photo { command }) => {
            Cli::new(planner, renderer)
                .handle_photo_command(command)
                .await
        }
        Some(Notify { command }) => {
            Cli::new(planner, renderer)
                .handle_notify_command(command)
                .await
        }
        Some(Init) => Cli::new(planner, renderer).init().await,
        Some(Export(args)) => Cli::new(planner, renderer).export(args).await,
        Some(Import(args)) => Cli::new(planner, renderer).import(args).await,
        Some(Serve) => {
            info!("Starting Forkcast MCP server");
            run_stdio_server(ForkcastMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        Some(Dashboard) | None => Cli::new(planner, renderer).dashboard().await,
    }
}
