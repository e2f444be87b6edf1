//! Data models for plan entries and attempts.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that presentation stays separate from the
//! data structures.
//!
//! - [`PlanEntry`]: one immutable `(week, day, column)` workout from the plan
//!   table, holding raw [`SetSpec`] and [`RestSpec`] cells that are
//!   interpreted on demand
//! - [`Attempt`] / [`NewAttempt`]: a logged session or max-rep test, before
//!   and after the store assigns an ID
//! - [`Outcome`] / [`SetResult`]: how a session went, classified from its
//!   per-set results
//!
//! # Examples
//!
//! ```rust
//! use pushups_core::models::{Outcome, SetResult, SetSpec};
//!
//! let target = SetSpec::new("MAX≥12").target();
//! let results = [SetResult::new(10, 10), SetResult::new(14, target)];
//! assert_eq!(Outcome::classify(&results), Outcome::Success);
//! ```

pub mod attempt;
pub mod outcome;
pub mod plan;

#[cfg(test)]
mod tests;

pub use attempt::{decode_sets, encode_sets, Attempt, NewAttempt, TEST_COLUMN, TEST_SENTINEL};
pub use outcome::{Outcome, SetResult};
pub use plan::{PlanEntry, RestBounds, RestSpec, SetSpec, DEFAULT_REST_SECONDS};
