//! Tests for the session state machine.

use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::models::{Outcome, PlanEntry, RestSpec, SetResult, SetSpec};

fn entry(sets: &[&str], rest: &str) -> PlanEntry {
    PlanEntry {
        week: 2,
        day: 3,
        column: "1".to_string(),
        sets: sets.iter().map(|s| SetSpec::new(*s)).collect(),
        rest: RestSpec::new(rest),
    }
}

fn engine(sets: &[&str], rest: &str) -> SessionEngine {
    SessionEngine::with_rng(
        SessionKey::new(2, 3, "1"),
        Some(entry(sets, rest)),
        StdRng::seed_from_u64(7),
    )
}

fn rest_epoch(effect: &Effect) -> u64 {
    match effect {
        Effect::StartRest { epoch, .. } => *epoch,
        other => panic!("expected a rest to start, got {other:?}"),
    }
}

fn recorded(effect: Effect) -> crate::models::NewAttempt {
    match effect {
        Effect::Record(attempt) => attempt,
        other => panic!("expected an attempt to be recorded, got {other:?}"),
    }
}

#[test]
fn test_initial_state_targets_first_set() {
    let engine = engine(&["10", "12", "MAX≥15"], "60s");
    let state = engine.state();
    assert_eq!(engine.phase(), Phase::ActiveSet);
    assert_eq!(state.current_index, 0);
    assert_eq!(state.target_reps, 10);
    assert_eq!(state.rest_seconds_left, None);
    assert!(state.results.is_empty());
    assert!(!engine.is_final_set());
}

#[test]
fn test_complete_set_records_target_and_starts_rest() {
    let mut engine = engine(&["10", "12", "MAX≥15"], "60s");
    let effect = engine.complete_set();

    assert_eq!(
        effect,
        Effect::StartRest {
            epoch: rest_epoch(&effect),
            seconds: 60
        }
    );
    assert_eq!(engine.phase(), Phase::Resting);
    assert_eq!(engine.state().rest_seconds_left, Some(60));
    assert_eq!(engine.state().results, [SetResult::new(10, 10)]);
}

#[test]
fn test_countdown_advances_to_next_set() {
    let mut engine = engine(&["10", "12", "MAX≥15"], "3s");
    let epoch = rest_epoch(&engine.complete_set());

    assert_eq!(engine.tick(epoch), Tick::Counting(2));
    assert_eq!(engine.tick(epoch), Tick::Counting(1));
    assert_eq!(engine.tick(epoch), Tick::Advanced);

    let state = engine.state();
    assert_eq!(engine.phase(), Phase::ActiveSet);
    assert_eq!(state.current_index, 1);
    assert_eq!(state.target_reps, 12);
    assert_eq!(state.rest_seconds_left, None);
}

#[test]
fn test_skip_rest_when_not_resting_is_noop() {
    let mut engine = engine(&["10", "12"], "60s");
    let before = engine.state().clone();
    assert!(!engine.skip_rest());
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_skip_rest_advances_exactly_once() {
    let mut engine = engine(&["10", "12", "MAX≥15"], "60s");
    let epoch = rest_epoch(&engine.complete_set());

    assert!(engine.skip_rest());
    assert_eq!(engine.state().current_index, 1);
    assert_eq!(engine.state().rest_seconds_left, None);

    // A second skip and a tick from the cancelled countdown change nothing.
    assert!(!engine.skip_rest());
    assert_eq!(engine.tick(epoch), Tick::Stale);
    assert_eq!(engine.state().current_index, 1);
}

#[test]
fn test_stale_tick_does_not_touch_a_newer_rest() {
    let mut engine = engine(&["10", "12", "MAX≥15"], "5s");
    let first = rest_epoch(&engine.complete_set());
    engine.skip_rest();
    let second = rest_epoch(&engine.complete_set());

    assert_ne!(first, second);
    assert_eq!(engine.tick(first), Tick::Stale);
    assert_eq!(engine.state().rest_seconds_left, Some(5));
    assert_eq!(engine.tick(second), Tick::Counting(4));
}

#[test]
fn test_round_trip_records_one_attempt() {
    let mut engine = engine(&["10", "12", "8", "8", "MAX≥15"], "60-90s");
    for _ in 0..4 {
        rest_epoch(&engine.complete_set());
        assert!(engine.skip_rest());
    }
    assert!(engine.is_final_set());
    assert_eq!(engine.state().target_reps, 15);

    let attempt = recorded(engine.submit_final_set(18));
    assert_eq!(attempt.sets_completed, [10, 12, 8, 8, 18]);
    assert_eq!(attempt.outcome, Outcome::Success);
    assert_eq!((attempt.week, attempt.day, attempt.column.as_str()), (2, 3, "1"));

    assert_eq!(engine.phase(), Phase::Complete);
    assert_eq!(engine.outcome(), Some(Outcome::Success));
    assert_eq!(engine.submit_final_set(1), Effect::None);
    assert_eq!(engine.complete_set(), Effect::None);
}

#[test]
fn test_final_set_shortfall_is_partial() {
    let mut engine = engine(&["10", "MAX≥10"], "60s");
    engine.complete_set();
    engine.skip_rest();
    let attempt = recorded(engine.submit_final_set(5));
    assert_eq!(attempt.outcome, Outcome::Partial);
}

#[test]
fn test_final_set_zero_after_full_sets_is_partial() {
    let mut engine = engine(&["10", "10"], "60s");
    engine.complete_set();
    engine.skip_rest();
    let attempt = recorded(engine.submit_final_set(0));
    assert_eq!(attempt.sets_completed, [10, 0]);
    assert_eq!(attempt.outcome, Outcome::Partial);
}

#[test]
fn test_zero_reps_on_only_set_is_incomplete() {
    let mut engine = engine(&["MAX≥10"], "60s");
    let attempt = recorded(engine.submit_final_set(0));
    assert_eq!(attempt.outcome, Outcome::Incomplete);
}

#[test]
fn test_submit_final_set_early_finishes_session() {
    let mut engine = engine(&["10", "12", "MAX≥15"], "60s");
    let attempt = recorded(engine.submit_final_set(7));
    assert_eq!(attempt.sets_completed, [7]);
    assert_eq!(engine.phase(), Phase::Complete);
}

#[test]
fn test_complete_set_on_last_set_records_attempt() {
    let mut engine = engine(&["10"], "60s");
    let attempt = recorded(engine.complete_set());
    assert_eq!(attempt.sets_completed, [10]);
    assert_eq!(attempt.outcome, Outcome::Success);
}

#[test]
fn test_submit_ignored_while_resting() {
    let mut engine = engine(&["10", "12"], "60s");
    engine.complete_set();
    assert_eq!(engine.submit_final_set(3), Effect::None);
    assert_eq!(engine.phase(), Phase::Resting);
}

#[test]
fn test_missing_plan_is_complete_immediately() {
    let mut engine = SessionEngine::new(SessionKey::new(99, 1, "A"), None);
    assert!(engine.is_plan_missing());
    assert_eq!(engine.phase(), Phase::Complete);
    assert!(engine.state().results.is_empty());
    assert_eq!(engine.set_labels(), [PLAN_NOT_FOUND]);
    assert_eq!(engine.outcome(), None);

    assert_eq!(engine.complete_set(), Effect::None);
    assert_eq!(engine.submit_final_set(10), Effect::None);
    assert!(engine.state().results.is_empty());
}

#[test]
fn test_range_rest_is_sampled_within_bounds() {
    for seed in 0..50 {
        let mut engine = SessionEngine::with_rng(
            SessionKey::new(1, 1, "1"),
            Some(entry(&["1", "1"], "60-90s")),
            StdRng::seed_from_u64(seed),
        );
        match engine.complete_set() {
            Effect::StartRest { seconds, .. } => assert!((60..=90).contains(&seconds)),
            other => panic!("expected a rest to start, got {other:?}"),
        }
    }
}

#[test]
fn test_zero_rest_moves_straight_to_next_set() {
    let mut engine = engine(&["10", "12"], "0s");
    assert_eq!(engine.complete_set(), Effect::None);
    assert_eq!(engine.phase(), Phase::ActiveSet);
    assert_eq!(engine.state().current_index, 1);
}

#[test]
fn test_unparsable_set_targets_zero() {
    let engine = engine(&["lots", "12"], "60s");
    assert_eq!(engine.state().target_reps, 0);
}
