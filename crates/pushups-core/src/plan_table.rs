//! The immutable training plan and its progression rule.
//!
//! The plan is a CSV table with one workout per row:
//!
//! ```text
//! Week,Day,Column,Set1,Set2,Set3,Set4,Set5,RecommendedRest
//! 1,1,1,2,3,2,2,MAX≥3,60s
//! ```
//!
//! Rows may have different numbers of set cells; empty cells are dropped.
//! A row that cannot be read is skipped without failing the rest of the load.

use std::{collections::HashSet, path::Path};

use log::{debug, warn};

use crate::{
    error::{Result, TrackerError},
    models::{Attempt, PlanEntry, RestSpec, SetSpec},
};

/// The plan shipped with the tracker.
const EMBEDDED_PLAN: &str = include_str!("../assets/hundred_pushups_plan.csv");

/// Days per program week.
pub const DAYS_PER_WEEK: i32 = 3;

/// Minimum cells in a row: week, day, column, one set, rest.
const MIN_ROW_CELLS: usize = 5;

/// Immutable list of plan entries in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanTable {
    entries: Vec<PlanEntry>,
}

impl PlanTable {
    /// Parses a plan from CSV text. The first line is a header.
    pub fn load(source: &str) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (line_no, line) in source.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let Some(entry) = parse_row(line) else {
                debug!("Skipping malformed plan row {}: {line:?}", line_no + 1);
                continue;
            };
            if !seen.insert((entry.week, entry.day, entry.column.clone())) {
                warn!(
                    "Skipping duplicate plan entry week {} day {} column {}",
                    entry.week, entry.day, entry.column
                );
                continue;
            }
            entries.push(entry);
        }

        debug!("Loaded {} plan entries", entries.len());
        Self { entries }
    }

    /// Reads and parses a plan CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| TrackerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::load(&source))
    }

    /// The plan compiled into the crate.
    pub fn embedded() -> Self {
        Self::load(EMBEDDED_PLAN)
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry in load order, where a new trainee starts.
    pub fn first(&self) -> Option<&PlanEntry> {
        self.entries.first()
    }

    /// Exact lookup on `(week, day, column)`.
    pub fn find(&self, week: i32, day: i32, column: &str) -> Option<&PlanEntry> {
        self.entries.iter().find(|e| e.matches(week, day, column))
    }

    /// The session that follows the last non-test attempt.
    ///
    /// With no history the first entry is returned. Otherwise the day
    /// advances within the week, rolling over to day 1 of the next week
    /// after day 3, on the same column. `None` means the program is over.
    pub fn next_after(&self, last_normal: Option<&Attempt>) -> Option<&PlanEntry> {
        let Some(last) = last_normal else {
            return self.first();
        };

        let (week, day) = if last.day < DAYS_PER_WEEK {
            (last.week, last.day + 1)
        } else {
            (last.week + 1, 1)
        };

        self.find(week, day, &last.column)
    }

    /// Distinct columns in load order.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !columns.contains(&entry.column.as_str()) {
                columns.push(&entry.column);
            }
        }
        columns
    }

    /// Entries for one week, in load order.
    pub fn week(&self, week: i32) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(move |e| e.week == week)
    }
}

fn parse_row(line: &str) -> Option<PlanEntry> {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    if cells.len() < MIN_ROW_CELLS {
        return None;
    }

    let week = cells[0].parse().ok()?;
    let day = cells[1].parse().ok()?;
    let column = cells[2].to_string();
    let sets = cells[3..cells.len() - 1]
        .iter()
        .filter(|cell| !cell.is_empty())
        .map(|cell| SetSpec::new(*cell))
        .collect();
    let rest = RestSpec::new(cells[cells.len() - 1]);

    Some(PlanEntry {
        week,
        day,
        column,
        sets,
        rest,
    })
}
