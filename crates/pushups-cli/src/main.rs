//! Pushups CLI Application
//!
//! Command-line front end for the guided pushup training tracker.

mod args;
mod cli;
mod renderer;
mod workout;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use pushups_core::TrackerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        plan_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_plan_file(plan_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Pushups started with {} plan entries", tracker.plan().len());

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));
    match command {
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Session(args)) => cli.session(args).await,
        Some(Test(args)) => cli.log_test(args).await,
        Some(History(args)) => cli.history(args).await,
        Some(Delete(args)) => cli.delete(args).await,
        Some(Home) | None => cli.home().await,
    }
}
