//! Parameter structures for tracker operations.
//!
//! These carry no interface-specific derives. The CLI defines its own clap
//! argument structs and converts them into these with `.into()`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_RECENT_LIMIT;

/// Parameters for operations requiring just an attempt ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the attempt to operate on
    pub id: u64,
}

/// Identifies one plan entry: week, day and difficulty column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanKey {
    pub week: i32,
    pub day: i32,
    pub column: String,
}

/// Parameters for listing the plan table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlan {
    /// Restrict the listing to one week
    pub week: Option<i32>,
}

/// Parameters for logging a standalone max-rep test.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogTest {
    /// Number of pushups done; values of zero or less are ignored
    pub count: i64,
}

/// Parameters for listing stored attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAttempts {
    /// Return every attempt, oldest first, instead of the most recent ones
    #[serde(default)]
    pub all: bool,
    /// Number of recent attempts to return when `all` is false
    pub limit: usize,
}

impl Default for ListAttempts {
    fn default() -> Self {
        Self {
            all: false,
            limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// Parameters for permanently deleting an attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAttempt {
    pub id: u64,
    /// Must be true; deletion cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}
