use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DeleteArgs, HistoryArgs, PlanCommands, SessionArgs, TestArgs};

/// Guided pushup training from the terminal
///
/// Follows a six-week progressive plan: each workout is a handful of sets
/// with timed rests in between. Run without a command to see your last
/// attempt and the workout that comes next.
#[derive(Parser)]
#[command(version, about, name = "pushups")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pushups/pushups.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Training plan CSV to use instead of the built-in one
    #[arg(long, global = true)]
    pub plan_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the pushups CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the last attempt and the next workout
    #[command(alias = "h")]
    Home,
    /// Browse the training plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Run a guided workout
    #[command(aliases = ["s", "go"])]
    Session(SessionArgs),
    /// Log a max-rep test
    #[command(alias = "t")]
    Test(TestArgs),
    /// Show logged attempts
    #[command(aliases = ["log", "ls"])]
    History(HistoryArgs),
    /// Delete a logged attempt permanently
    #[command(aliases = ["rm"])]
    Delete(DeleteArgs),
}
