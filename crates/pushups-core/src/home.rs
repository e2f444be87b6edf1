//! What the home screen shows: the last attempt and the session to do next.

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Attempt, Outcome, PlanEntry},
    plan_table::PlanTable,
    store::AttemptStore,
};

/// Read-only view derived from the attempt history and the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeProjection {
    /// Newest attempt of any kind, tests included
    pub last_attempt: Option<Attempt>,
    /// Newest attempt that was a plan session
    pub last_normal_attempt: Option<Attempt>,
    /// Plan entry following `last_normal_attempt`, or the first entry
    /// when there is no history; `None` past the end of the program
    pub upcoming_session: Option<PlanEntry>,
}

impl HomeProjection {
    /// Combines already fetched attempts with the plan progression rule.
    pub fn derive(
        last_attempt: Option<Attempt>,
        last_normal_attempt: Option<Attempt>,
        plan: &PlanTable,
    ) -> Self {
        let upcoming_session = plan.next_after(last_normal_attempt.as_ref()).cloned();
        Self {
            last_attempt,
            last_normal_attempt,
            upcoming_session,
        }
    }

    /// Queries the store and derives the projection.
    pub fn load(store: &dyn AttemptStore, plan: &PlanTable) -> Result<Self> {
        let last_attempt = store.last()?;
        let last_normal_attempt = store.last_excluding_outcome(Outcome::Test)?;
        Ok(Self::derive(last_attempt, last_normal_attempt, plan))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{models::NewAttempt, store::MemoryAttemptStore};

    fn session(second: i64, week: i32, day: i32) -> NewAttempt {
        NewAttempt {
            timestamp: Timestamp::from_second(second).unwrap(),
            week,
            day,
            column: "2".to_string(),
            outcome: Outcome::Success,
            sets_completed: vec![10, 10],
        }
    }

    #[test]
    fn test_empty_history_offers_first_entry() {
        let plan = PlanTable::embedded();
        let home = HomeProjection::load(&MemoryAttemptStore::new(), &plan).unwrap();
        assert_eq!(home.last_attempt, None);
        assert_eq!(home.upcoming_session.as_ref(), plan.first());
    }

    #[test]
    fn test_tests_do_not_move_the_plan() {
        let plan = PlanTable::embedded();
        let store = MemoryAttemptStore::new();
        store.insert(&session(100, 1, 3)).unwrap();
        let test = store
            .insert(&NewAttempt::test(40, Timestamp::from_second(200).unwrap()).unwrap())
            .unwrap();

        let home = HomeProjection::load(&store, &plan).unwrap();
        assert_eq!(home.last_attempt, Some(test));
        assert_eq!(home.last_normal_attempt.as_ref().map(|a| a.day), Some(3));

        let upcoming = home.upcoming_session.unwrap();
        assert_eq!((upcoming.week, upcoming.day, upcoming.column.as_str()), (2, 1, "2"));
    }

    #[test]
    fn test_end_of_program_has_no_upcoming_session() {
        let plan = PlanTable::embedded();
        let store = MemoryAttemptStore::new();
        store.insert(&session(100, 6, 3)).unwrap();

        let home = HomeProjection::load(&store, &plan).unwrap();
        assert!(home.last_attempt.is_some());
        assert_eq!(home.upcoming_session, None);
    }
}
