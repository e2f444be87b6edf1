//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Attempt, PlanEntry};

/// Newtype wrapper for displaying an attempt history.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use pushups_core::{display::Attempts, NewAttempt};
///
/// let test = NewAttempt::test(40, Timestamp::now()).unwrap().with_id(1);
/// let output = Attempts(vec![test]).to_string();
/// assert!(output.contains("Max-rep test"));
///
/// assert_eq!(Attempts(vec![]).to_string(), "No attempts recorded.\n");
/// ```
pub struct Attempts(pub Vec<Attempt>);

impl Attempts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attempt> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Attempts {
    type Item = &'a Attempt;
    type IntoIter = std::slice::Iter<'a, Attempt>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Attempts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No attempts recorded.");
        }
        for attempt in &self.0 {
            write!(f, "{attempt}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper displaying plan entries as one markdown table.
pub struct PlanEntries(pub Vec<PlanEntry>);

impl PlanEntries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for PlanEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plan entries found.");
        }

        writeln!(f, "| Week | Day | Column | Sets | Rest |")?;
        writeln!(f, "|:-:|:-:|:-:|:-|:-:|")?;
        for entry in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                entry.week,
                entry.day,
                entry.column,
                entry.sets_line(),
                entry.rest
            )?;
        }
        Ok(())
    }
}
