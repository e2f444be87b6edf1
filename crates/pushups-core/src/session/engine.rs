//! The synchronous session state machine.

use jiff::Timestamp;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{NewAttempt, Outcome, PlanEntry, SetResult, SetSpec};

/// Set list shown when the requested plan entry does not exist.
pub const PLAN_NOT_FOUND: &str = "Error: Plan not found";

/// The `(week, day, column)` a session was started for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub week: i32,
    pub day: i32,
    pub column: String,
}

impl SessionKey {
    pub fn new(week: i32, day: i32, column: impl Into<String>) -> Self {
        Self {
            week,
            day,
            column: column.into(),
        }
    }
}

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the current set to be done
    ActiveSet,
    /// Rest timer counting down before the next set
    Resting,
    /// Terminal
    Complete,
}

/// Observable state of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_index: usize,
    pub target_reps: u32,
    /// Present only while resting
    pub rest_seconds_left: Option<u32>,
    pub results: Vec<SetResult>,
    pub is_complete: bool,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        if self.is_complete {
            Phase::Complete
        } else if self.rest_seconds_left.is_some() {
            Phase::Resting
        } else {
            Phase::ActiveSet
        }
    }
}

/// Side effect the caller must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do
    None,
    /// Start ticking a rest countdown tagged with `epoch`
    StartRest { epoch: u64, seconds: u32 },
    /// Hand this attempt to the store; emitted at most once per session
    Record(NewAttempt),
}

/// Result of delivering one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The tick belongs to a rest period that is already over
    Stale,
    /// Still resting, with this many seconds left
    Counting(u32),
    /// The rest ran out and the next set is active
    Advanced,
}

/// Drives one plan entry's sets from the first set to completion.
///
/// Every transition is a method taking `&mut self`, so a single owner
/// serializes all changes. Timer ticks carry the epoch of the rest period
/// they were started for; skipping the rest bumps the epoch, so a tick that
/// arrives afterwards is reported as [`Tick::Stale`] and changes nothing.
#[derive(Debug)]
pub struct SessionEngine {
    key: SessionKey,
    plan: Option<PlanEntry>,
    set_labels: Vec<String>,
    state: SessionState,
    rest_epoch: u64,
    recorded: bool,
    rng: StdRng,
}

impl SessionEngine {
    /// Creates an engine for `plan`, or an already complete one when the
    /// plan entry was not found.
    pub fn new(key: SessionKey, plan: Option<PlanEntry>) -> Self {
        Self::with_rng(key, plan, StdRng::from_entropy())
    }

    /// Same as [`SessionEngine::new`] with a caller-supplied random source
    /// for rest sampling.
    pub fn with_rng(key: SessionKey, plan: Option<PlanEntry>, rng: StdRng) -> Self {
        let set_labels = match &plan {
            Some(entry) => entry.sets.iter().map(|s| s.raw().to_string()).collect(),
            None => vec![PLAN_NOT_FOUND.to_string()],
        };
        let target_reps = set_labels
            .first()
            .map(|label| SetSpec::new(label.as_str()).target())
            .unwrap_or(0);

        let state = SessionState {
            current_index: 0,
            target_reps,
            rest_seconds_left: None,
            results: Vec::new(),
            is_complete: plan.is_none(),
        };

        Self {
            key,
            plan,
            set_labels,
            state,
            rest_epoch: 0,
            recorded: false,
            rng,
        }
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn plan(&self) -> Option<&PlanEntry> {
        self.plan.as_ref()
    }

    /// True when the engine was created for a plan entry that does not
    /// exist.
    pub fn is_plan_missing(&self) -> bool {
        self.plan.is_none()
    }

    /// Raw set cells, or a single placeholder when the plan is missing.
    pub fn set_labels(&self) -> &[String] {
        &self.set_labels
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Whether the active set is the last one, where reps are entered by
    /// hand.
    pub fn is_final_set(&self) -> bool {
        self.set_count() > 0 && self.state.current_index + 1 == self.set_count()
    }

    /// Outcome of a finished session; `None` until complete or when nothing
    /// was performed.
    pub fn outcome(&self) -> Option<Outcome> {
        (self.state.is_complete && !self.state.results.is_empty())
            .then(|| Outcome::classify(&self.state.results))
    }

    /// Marks the active set as done at its recommended reps.
    ///
    /// Non-final sets are always recorded at the full target; only the final
    /// set takes a real count through [`SessionEngine::submit_final_set`].
    pub fn complete_set(&mut self) -> Effect {
        if self.phase() != Phase::ActiveSet {
            return Effect::None;
        }

        let recommended = self.target_at(self.state.current_index);
        self.state
            .results
            .push(SetResult::new(recommended, recommended));

        if self.state.current_index + 1 < self.set_count() {
            self.start_rest()
        } else {
            self.finish()
        }
    }

    /// Records the reps actually done on the active set and finishes the
    /// session, however many sets came before it.
    pub fn submit_final_set(&mut self, actual_reps: u32) -> Effect {
        if self.phase() != Phase::ActiveSet {
            return Effect::None;
        }

        let recommended = self.target_at(self.state.current_index);
        self.state
            .results
            .push(SetResult::new(actual_reps, recommended));
        self.finish()
    }

    /// Delivers one second of rest for the period tagged `epoch`.
    pub fn tick(&mut self, epoch: u64) -> Tick {
        if epoch != self.rest_epoch || self.phase() != Phase::Resting {
            return Tick::Stale;
        }

        let left = self.state.rest_seconds_left.unwrap_or(1).saturating_sub(1);
        if left == 0 {
            self.advance();
            Tick::Advanced
        } else {
            self.state.rest_seconds_left = Some(left);
            Tick::Counting(left)
        }
    }

    /// Ends the rest early. Returns `false`, changing nothing, when not
    /// resting.
    pub fn skip_rest(&mut self) -> bool {
        if self.phase() != Phase::Resting {
            return false;
        }
        self.advance();
        true
    }

    /// Invalidates any running countdown, e.g. when the session is torn
    /// down.
    pub fn cancel_rest(&mut self) {
        self.rest_epoch += 1;
    }

    fn set_count(&self) -> usize {
        self.plan.as_ref().map_or(0, |p| p.sets.len())
    }

    fn target_at(&self, index: usize) -> u32 {
        self.plan
            .as_ref()
            .and_then(|p| p.sets.get(index))
            .map_or(0, SetSpec::target)
    }

    fn start_rest(&mut self) -> Effect {
        let seconds = self
            .plan
            .as_ref()
            .map_or(0, |p| p.rest.sample(&mut self.rng));

        if seconds == 0 {
            self.advance();
            return Effect::None;
        }

        self.rest_epoch += 1;
        self.state.rest_seconds_left = Some(seconds);
        Effect::StartRest {
            epoch: self.rest_epoch,
            seconds,
        }
    }

    fn advance(&mut self) {
        self.cancel_rest();
        let next = self.state.current_index + 1;
        self.state.current_index = next;
        self.state.target_reps = self.target_at(next);
        self.state.rest_seconds_left = None;
    }

    fn finish(&mut self) -> Effect {
        self.state.is_complete = true;
        self.state.rest_seconds_left = None;

        if self.recorded || self.plan.is_none() {
            return Effect::None;
        }
        self.recorded = true;

        Effect::Record(NewAttempt {
            timestamp: Timestamp::now(),
            week: self.key.week,
            day: self.key.day,
            column: self.key.column.clone(),
            outcome: Outcome::classify(&self.state.results),
            sets_completed: self.state.results.iter().map(|r| r.actual).collect(),
        })
    }
}
