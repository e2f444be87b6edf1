//! Progress view of a guided session.

use std::fmt;

use super::datetime::RestClock;
use crate::{
    models::Outcome,
    session::{Phase, SessionState},
};

/// A session's set labels next to its current state.
///
/// Finished sets show the reps done, the active set is bold and upcoming
/// sets show their plan cell.
pub struct SessionProgress<'a> {
    pub labels: &'a [String],
    pub state: &'a SessionState,
}

impl<'a> SessionProgress<'a> {
    pub fn new(labels: &'a [String], state: &'a SessionState) -> Self {
        Self { labels, state }
    }

    fn sets_line(&self) -> String {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| match self.state.results.get(index) {
                Some(result) if result.met_target() => format!("✓{}", result.actual),
                Some(result) => format!("✗{}", result.actual),
                None if index == self.state.current_index && !self.state.is_complete => {
                    format!("**[{label}]**")
                }
                None => label.clone(),
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl fmt::Display for SessionProgress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state.is_complete && self.state.results.is_empty() {
            return writeln!(f, "{}", self.labels.join(" "));
        }

        let total = self.labels.len();
        match self.state.phase() {
            Phase::ActiveSet => writeln!(
                f,
                "## Set {} of {}: {} reps",
                self.state.current_index + 1,
                total,
                self.state.target_reps
            )?,
            Phase::Resting => writeln!(
                f,
                "## Rest {}",
                RestClock(self.state.rest_seconds_left.unwrap_or(0))
            )?,
            Phase::Complete => writeln!(f, "## Session complete")?,
        }
        writeln!(f)?;
        writeln!(f, "{}", self.sets_line())?;

        if self.state.is_complete {
            let outcome = Outcome::classify(&self.state.results);
            let reps: u64 = self.state.results.iter().map(|r| u64::from(r.actual)).sum();
            writeln!(f)?;
            writeln!(f, "**{}** with {reps} pushups", outcome.with_icon())?;
        }
        Ok(())
    }
}
