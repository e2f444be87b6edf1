//! Plan lookups and guided sessions.

use crate::{
    models::PlanEntry,
    params::{ListPlan, PlanKey},
    session::{Session, SessionEngine, SessionKey},
};

use super::Tracker;

impl Tracker {
    /// Starts a fresh guided session for one plan entry.
    ///
    /// A key with no plan entry still yields a session; it is already
    /// complete, has no results and never writes an attempt.
    pub fn start_session(&self, params: &PlanKey) -> Session {
        let key = SessionKey::new(params.week, params.day, params.column.as_str());
        let plan = self.find_plan_entry(params);
        Session::start(SessionEngine::new(key, plan), self.clone())
    }

    /// Looks up the plan entry for `(week, day, column)`.
    pub fn find_plan_entry(&self, params: &PlanKey) -> Option<PlanEntry> {
        self.plan
            .find(params.week, params.day, &params.column)
            .cloned()
    }

    /// Plan entries in load order, optionally for a single week.
    pub fn list_plan(&self, params: &ListPlan) -> Vec<PlanEntry> {
        match params.week {
            Some(week) => self.plan.week(week).cloned().collect(),
            None => self.plan.entries().to_vec(),
        }
    }
}
