//! Display implementations for domain models.
//!
//! Output is markdown: attempts and plan entries render as a heading with a
//! short bullet list, the home view as two sections.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    home::HomeProjection,
    models::{Attempt, Outcome, PlanEntry, RestSpec, SetSpec},
};

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

impl fmt::Display for RestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

impl PlanEntry {
    /// `Week 2 · Day 1 · Column 3`
    pub fn title(&self) -> String {
        format!("Week {} · Day {} · Column {}", self.week, self.day, self.column)
    }

    /// Set cells joined for one-line display.
    pub fn sets_line(&self) -> String {
        self.sets
            .iter()
            .map(SetSpec::raw)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.title())?;
        writeln!(f)?;
        writeln!(f, "- **Sets**: {}", self.sets_line())?;
        writeln!(f, "- **Rest**: {}", self.rest)?;
        writeln!(f, "- **Minimum total**: {}", self.total_target())?;
        writeln!(f)
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_test() {
            writeln!(f, "### {}. Max-rep test ({})", self.id, self.outcome.with_icon())?;
            writeln!(f)?;
            writeln!(f, "- **When**: {}", LocalDateTime(&self.timestamp))?;
            writeln!(f, "- **Pushups**: {}", self.total_reps())?;
        } else {
            writeln!(
                f,
                "### {}. Week {} · Day {} · Column {} ({})",
                self.id,
                self.week,
                self.day,
                self.column,
                self.outcome.with_icon()
            )?;
            writeln!(f)?;
            writeln!(f, "- **When**: {}", LocalDateTime(&self.timestamp))?;
            let sets = self
                .sets_completed
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" / ");
            writeln!(f, "- **Sets**: {sets} ({} total)", self.total_reps())?;
        }
        writeln!(f)
    }
}

impl fmt::Display for HomeProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Last attempt")?;
        writeln!(f)?;
        match &self.last_attempt {
            Some(attempt) => write!(f, "{attempt}")?,
            None => writeln!(f, "No attempts yet.\n")?,
        }

        writeln!(f, "## Up next")?;
        writeln!(f)?;
        match &self.upcoming_session {
            Some(entry) => write!(f, "{entry}"),
            None if self.last_normal_attempt.is_some() => {
                writeln!(f, "Program complete. Log a test to see your new max.")
            }
            None => writeln!(f, "The training plan is empty."),
        }
    }
}
