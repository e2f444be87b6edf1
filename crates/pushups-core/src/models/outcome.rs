//! Attempt outcomes and per-set results.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of attempt outcomes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    /// Every set met or beat its recommendation
    Success,

    /// At least one set fell short but was not skipped entirely
    Partial,

    /// Every shortfall was a set with zero reps
    Incomplete,

    /// A standalone max-rep test, not tied to a plan entry
    Test,
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUCCESS" => Ok(Outcome::Success),
            "PARTIAL" => Ok(Outcome::Partial),
            "INCOMPLETE" => Ok(Outcome::Incomplete),
            "TEST" => Ok(Outcome::Test),
            _ => Err(format!("Invalid outcome: {s}")),
        }
    }
}

impl Outcome {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Partial => "PARTIAL",
            Outcome::Incomplete => "INCOMPLETE",
            Outcome::Test => "TEST",
        }
    }

    /// Get outcome with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pushups_core::models::Outcome;
    ///
    /// assert_eq!(Outcome::Success.with_icon(), "✓ Success");
    /// assert_eq!(Outcome::Test.with_icon(), "◆ Test");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Outcome::Success => "✓ Success",
            Outcome::Partial => "◐ Partial",
            Outcome::Incomplete => "○ Incomplete",
            Outcome::Test => "◆ Test",
        }
    }

    /// Classify a finished session from its per-set results.
    ///
    /// Any shortfall makes the session [`Outcome::Partial`] as long as some
    /// reps were done, including a session where full sets are mixed with
    /// skipped ones. [`Outcome::Incomplete`] is left for sessions where no
    /// set had any reps.
    ///
    /// ```rust
    /// use pushups_core::models::{Outcome, SetResult};
    ///
    /// let results = [SetResult::new(10, 10), SetResult::new(0, 10)];
    /// assert_eq!(Outcome::classify(&results), Outcome::Partial);
    /// ```
    pub fn classify(results: &[SetResult]) -> Self {
        if results.iter().all(SetResult::met_target) {
            Outcome::Success
        } else if results.iter().any(|r| r.actual > 0) {
            Outcome::Partial
        } else {
            Outcome::Incomplete
        }
    }
}

/// Reps performed in one set next to the reps the plan recommended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetResult {
    pub actual: u32,
    pub recommended: u32,
}

impl SetResult {
    pub fn new(actual: u32, recommended: u32) -> Self {
        Self {
            actual,
            recommended,
        }
    }

    pub fn met_target(&self) -> bool {
        self.actual >= self.recommended
    }
}
