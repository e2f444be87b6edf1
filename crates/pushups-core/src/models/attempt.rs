//! Attempt model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Outcome;

/// Week and day recorded for attempts that are not tied to a plan entry.
pub const TEST_SENTINEL: i32 = -1;

/// Column recorded for max-rep test attempts.
pub const TEST_COLUMN: &str = "TEST";

/// Separator used when storing per-set reps as text.
const SETS_SEPARATOR: &str = "|";

/// A persisted record of one finished session or one max-rep test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attempt {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// When the attempt was recorded (UTC)
    pub timestamp: Timestamp,

    /// Plan week, or [`TEST_SENTINEL`] for tests
    pub week: i32,

    /// Plan day, or [`TEST_SENTINEL`] for tests
    pub day: i32,

    /// Plan column, or [`TEST_COLUMN`] for tests
    pub column: String,

    pub outcome: Outcome,

    /// Reps actually performed, one value per set
    pub sets_completed: Vec<u32>,
}

impl Attempt {
    /// Whether this is a standalone max-rep test.
    pub fn is_test(&self) -> bool {
        self.outcome == Outcome::Test
    }

    /// Total reps across all sets.
    pub fn total_reps(&self) -> u64 {
        self.sets_completed.iter().map(|&reps| u64::from(reps)).sum()
    }
}

/// An attempt that has not been stored yet and so has no ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAttempt {
    pub timestamp: Timestamp,
    pub week: i32,
    pub day: i32,
    pub column: String,
    pub outcome: Outcome,
    pub sets_completed: Vec<u32>,
}

impl NewAttempt {
    /// Builds a max-rep test record, or `None` when there is nothing to log.
    pub fn test(pushup_count: i64, timestamp: Timestamp) -> Option<Self> {
        let count = u32::try_from(pushup_count).ok().filter(|&c| c > 0)?;
        Some(Self {
            timestamp,
            week: TEST_SENTINEL,
            day: TEST_SENTINEL,
            column: TEST_COLUMN.to_string(),
            outcome: Outcome::Test,
            sets_completed: vec![count],
        })
    }

    /// Attaches the ID assigned by the store.
    pub fn with_id(self, id: u64) -> Attempt {
        Attempt {
            id,
            timestamp: self.timestamp,
            week: self.week,
            day: self.day,
            column: self.column,
            outcome: self.outcome,
            sets_completed: self.sets_completed,
        }
    }
}

/// Encodes per-set reps for storage, e.g. `[10, 12, 8]` as `10|12|8`.
pub fn encode_sets(sets: &[u32]) -> String {
    sets.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(SETS_SEPARATOR)
}

/// Decodes stored per-set reps, dropping cells that are not numbers.
pub fn decode_sets(encoded: &str) -> Vec<u32> {
    encoded
        .split(SETS_SEPARATOR)
        .filter_map(|cell| cell.trim().parse().ok())
        .collect()
}
