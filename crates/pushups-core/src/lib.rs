//! Core library for the pushups training tracker.
//!
//! This crate holds the training plan, the guided session state machine and
//! the attempt history, along with persistence and display formatting.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting for lists, results and timestamps
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pushups_core::{params::PlanKey, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("pushups.db"))
//!     .build()
//!     .await?;
//!
//! let home = tracker.home().await?;
//! if let Some(next) = home.upcoming_session {
//!     let session = tracker.start_session(&PlanKey {
//!         week: next.week,
//!         day: next.day,
//!         column: next.column.clone(),
//!     });
//!     session.complete_set();
//!     session.skip_rest();
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod home;
pub mod models;
pub mod params;
pub mod plan_table;
pub mod session;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use error::{Result, TrackerError};
pub use home::HomeProjection;
pub use models::{Attempt, NewAttempt, Outcome, PlanEntry, RestSpec, SetResult, SetSpec};
pub use plan_table::PlanTable;
pub use session::{Phase, Session, SessionState};
pub use store::{AttemptStore, MemoryAttemptStore, SqliteAttemptStore};
pub use tracker::{Feed, Tracker, TrackerBuilder};
