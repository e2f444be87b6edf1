//! Display formatting for terminal output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrapper types here format the same data for a particular context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Collection &    │    │   Formatted     │
//! │ (Attempt, Plan) │───▶│ Result Wrappers │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`Attempts`] history list and [`PlanEntries`] table
//! - [`results`]: Write confirmations ([`LoggedResult`], [`DeleteResult`])
//! - [`session`]: Live progress of a guided session
//! - [`status`]: One-line status messages
//! - [`datetime`]: Timestamps and countdown clocks
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use pushups_core::display::{OperationStatus, RestClock};
//!
//! assert_eq!(RestClock(75).to_string(), "1:15");
//!
//! let status = OperationStatus::notice("Nothing to log");
//! assert!(status.to_string().starts_with("Note:"));
//! ```
//!
//! All formatters produce markdown; the CLI renders it with termimad.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod session;
pub mod status;

pub use collections::{Attempts, PlanEntries};
pub use datetime::{LocalDateTime, RestClock};
pub use results::{DeleteResult, LoggedResult};
pub use session::SessionProgress;
pub use status::OperationStatus;
