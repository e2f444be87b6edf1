//! Plan entry model and the set/rest spec cells it is made of.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Rest used whenever a rest cell cannot be understood.
pub const DEFAULT_REST_SECONDS: u32 = 60;

/// Markers introducing an open-ended "at least N" set, matched after
/// uppercasing the cell.
const AT_LEAST_MARKERS: [&str; 3] = ["≥", ">=", "AT LEAST"];

static REST_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)-(\d+)s").expect("valid rest range pattern"));
static REST_FIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)s").expect("valid fixed rest pattern"));

/// One prescribed workout unit, identified by `(week, day, column)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanEntry {
    /// Program week, starting at 1
    pub week: i32,

    /// Day within the week (1..=3)
    pub day: i32,

    /// Program track, chosen from the initial test result
    pub column: String,

    /// Sets in the order they are performed
    pub sets: Vec<SetSpec>,

    /// Rest between sets
    pub rest: RestSpec,
}

impl PlanEntry {
    /// Whether this entry has the given identity key.
    pub fn matches(&self, week: i32, day: i32, column: &str) -> bool {
        self.week == week && self.day == day && self.column == column
    }

    /// Sum of all set targets, counting open-ended sets at their minimum.
    pub fn total_target(&self) -> u64 {
        self.sets.iter().map(|set| u64::from(set.target())).sum()
    }
}

/// A set cell as written in the plan, e.g. `12` or `MAX≥15`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SetSpec(String);

impl SetSpec {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Target reps for this set. Open-ended sets yield their minimum and
    /// anything unparsable yields 0.
    ///
    /// ```rust
    /// use pushups_core::models::SetSpec;
    ///
    /// assert_eq!(SetSpec::new("12").target(), 12);
    /// assert_eq!(SetSpec::new("at least 15").target(), 15);
    /// assert_eq!(SetSpec::new("MAX≥20").target(), 20);
    /// assert_eq!(SetSpec::new("").target(), 0);
    /// ```
    pub fn target(&self) -> u32 {
        let upper = self.0.to_uppercase();
        let number = AT_LEAST_MARKERS
            .iter()
            .find_map(|marker| upper.split_once(*marker).map(|(_, rest)| rest))
            .unwrap_or(upper.as_str());
        number.trim().parse().unwrap_or(0)
    }

    /// Whether the set asks for a minimum rather than an exact count.
    pub fn is_open_ended(&self) -> bool {
        let upper = self.0.to_uppercase();
        AT_LEAST_MARKERS.iter().any(|marker| upper.contains(*marker))
    }
}

/// A rest cell as written in the plan, e.g. `60s`, `60-90s` or `120s+`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RestSpec(String);

/// Interpreted form of a [`RestSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestBounds {
    Fixed(u32),
    Range { low: u32, high: u32 },
}

impl RestSpec {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Interprets the cell; a range is tried before a fixed value so that
    /// `60-90s` is not read as `90s`.
    pub fn bounds(&self) -> RestBounds {
        if let Some(caps) = REST_RANGE.captures(&self.0) {
            if let (Ok(a), Ok(b)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
                return RestBounds::Range {
                    low: a.min(b),
                    high: a.max(b),
                };
            }
        }
        let seconds = REST_FIXED
            .captures(&self.0)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(DEFAULT_REST_SECONDS);
        RestBounds::Fixed(seconds)
    }

    /// Draws a concrete rest duration in seconds.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match self.bounds() {
            RestBounds::Fixed(seconds) => seconds,
            RestBounds::Range { low, high } => rng.gen_range(low..=high),
        }
    }
}

impl Default for RestSpec {
    fn default() -> Self {
        Self(format!("{DEFAULT_REST_SECONDS}s"))
    }
}
