//! Command argument wrappers and handlers.
//!
//! Each clap argument struct converts into a core parameter type from
//! `pushups_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! [`Cli`] owns the tracker and the renderer and turns every command's
//! result into markdown.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use pushups_core::{
    display::{Attempts, DeleteResult, LoggedResult, OperationStatus, PlanEntries},
    params::{DeleteAttempt, ListAttempts, ListPlan, LogTest, PlanKey},
    store::DEFAULT_RECENT_LIMIT,
    Tracker,
};

use crate::{renderer::TerminalRenderer, workout};

/// List plan entries
#[derive(Args)]
pub struct ListPlanArgs {
    /// Only show this week
    #[arg(short, long)]
    pub week: Option<i32>,
}

impl From<ListPlanArgs> for ListPlan {
    fn from(val: ListPlanArgs) -> Self {
        ListPlan { week: val.week }
    }
}

/// Identify a single workout in the plan
#[derive(Args)]
pub struct PlanKeyArgs {
    /// Program week
    pub week: i32,
    /// Day within the week (1-3)
    pub day: i32,
    /// Plan column, chosen from your initial test
    pub column: String,
}

impl From<PlanKeyArgs> for PlanKey {
    fn from(val: PlanKeyArgs) -> Self {
        PlanKey {
            week: val.week,
            day: val.day,
            column: val.column,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List workouts in the plan
    #[command(aliases = ["l", "ls"])]
    List(ListPlanArgs),
    /// Show one workout
    #[command(alias = "s")]
    Show(PlanKeyArgs),
}

/// Run a guided workout
///
/// Without arguments, starts the next workout in the plan.
#[derive(Args)]
pub struct SessionArgs {
    /// Program week
    #[arg(requires_all = ["day", "column"])]
    pub week: Option<i32>,
    /// Day within the week (1-3)
    pub day: Option<i32>,
    /// Plan column
    pub column: Option<String>,
}

impl SessionArgs {
    /// The explicitly requested workout, if all three parts were given.
    fn into_key(self) -> Option<PlanKey> {
        match (self.week, self.day, self.column) {
            (Some(week), Some(day), Some(column)) => Some(PlanKey { week, day, column }),
            _ => None,
        }
    }
}

/// Log a max-rep test
#[derive(Args)]
pub struct TestArgs {
    /// Number of pushups done in one go
    #[arg(allow_negative_numbers = true)]
    pub count: i64,
}

impl From<TestArgs> for LogTest {
    fn from(val: TestArgs) -> Self {
        LogTest { count: val.count }
    }
}

/// Show logged attempts
#[derive(Args)]
pub struct HistoryArgs {
    /// Show every attempt, oldest first
    #[arg(short, long)]
    pub all: bool,
    /// Number of recent attempts to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_RECENT_LIMIT)]
    pub limit: usize,
    /// Print JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

impl From<&HistoryArgs> for ListAttempts {
    fn from(val: &HistoryArgs) -> Self {
        ListAttempts {
            all: val.all,
            limit: val.limit,
        }
    }
}

/// Delete a logged attempt
#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the attempt, as shown by `history`
    pub id: u64,
    /// Confirm the deletion; it cannot be undone
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteArgs> for DeleteAttempt {
    fn from(val: DeleteArgs) -> Self {
        DeleteAttempt {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Command handlers bound to one tracker and renderer.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn home(&self) -> Result<()> {
        let home = self
            .tracker
            .home()
            .await
            .context("Failed to load home view")?;
        self.renderer.render(&home.to_string())
    }

    pub fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List(args) => {
                let entries = self.tracker.list_plan(&args.into());
                self.renderer.render(&PlanEntries(entries).to_string())
            }
            PlanCommands::Show(args) => {
                let key: PlanKey = args.into();
                match self.tracker.find_plan_entry(&key) {
                    Some(entry) => self.renderer.render(&entry.to_string()),
                    None => bail!(
                        "No workout for week {} day {} column {}",
                        key.week,
                        key.day,
                        key.column
                    ),
                }
            }
        }
    }

    pub async fn session(&self, args: SessionArgs) -> Result<()> {
        let key = match args.into_key() {
            Some(key) => key,
            None => {
                let home = self
                    .tracker
                    .home()
                    .await
                    .context("Failed to find the next workout")?;
                let Some(next) = home.upcoming_session else {
                    let status = OperationStatus::notice(
                        "No workout left in the plan; log a test to see your max",
                    );
                    return self.renderer.render(&status.to_string());
                };
                PlanKey {
                    week: next.week,
                    day: next.day,
                    column: next.column,
                }
            }
        };

        debug!(
            "Starting session for week {} day {} column {}",
            key.week, key.day, key.column
        );
        let session = self.tracker.start_session(&key);
        workout::run(session, &self.renderer).await
    }

    pub async fn log_test(&self, args: TestArgs) -> Result<()> {
        let logged = self
            .tracker
            .log_test(&args.into())
            .await
            .context("Failed to log test")?;
        match logged {
            Some(attempt) => self
                .renderer
                .render(&LoggedResult::new(attempt).to_string()),
            None => self.renderer.render(
                &OperationStatus::notice("Pushup count must be above zero; nothing logged")
                    .to_string(),
            ),
        }
    }

    pub async fn history(&self, args: HistoryArgs) -> Result<()> {
        let params: ListAttempts = (&args).into();
        if args.json {
            let json = self
                .tracker
                .export_attempts(&params)
                .await
                .context("Failed to export history")?;
            println!("{json}");
            return Ok(());
        }

        let attempts = self
            .tracker
            .list_attempts(&params)
            .await
            .context("Failed to load history")?;
        self.renderer.render(&Attempts(attempts).to_string())
    }

    pub async fn delete(&self, args: DeleteArgs) -> Result<()> {
        let deleted = self
            .tracker
            .delete_attempt(&args.into())
            .await
            .context("Failed to delete attempt")?;
        self.renderer
            .render(&DeleteResult::new(deleted).to_string())
    }
}
