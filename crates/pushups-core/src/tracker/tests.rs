//! Tests for tracker operations against the in-memory store.

use std::sync::Arc;

use super::*;
use crate::{
    models::Outcome,
    params::{DeleteAttempt, ListAttempts, ListPlan, LogTest, PlanKey},
    store::MemoryAttemptStore,
};

async fn tracker() -> Tracker {
    TrackerBuilder::new()
        .with_store(Arc::new(MemoryAttemptStore::new()))
        .build()
        .await
        .unwrap()
}

fn key(week: i32, day: i32, column: &str) -> PlanKey {
    PlanKey {
        week,
        day,
        column: column.to_string(),
    }
}

#[tokio::test]
async fn test_log_test_ignores_non_positive_counts() {
    let tracker = tracker().await;
    assert!(tracker.log_test(&LogTest { count: 0 }).await.unwrap().is_none());
    assert!(tracker.log_test(&LogTest { count: -5 }).await.unwrap().is_none());
    assert!(tracker.last_attempt().await.unwrap().is_none());
}

#[tokio::test]
async fn test_log_test_stores_sentinel_attempt() {
    let tracker = tracker().await;
    let stored = tracker
        .log_test(&LogTest { count: 42 })
        .await
        .unwrap()
        .unwrap();

    assert_eq!((stored.week, stored.day, stored.column.as_str()), (-1, -1, "TEST"));
    assert_eq!(stored.outcome, Outcome::Test);
    assert_eq!(stored.sets_completed, [42]);
    assert!(tracker.last_normal_attempt().await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let tracker = tracker().await;
    let stored = tracker.log_test(&LogTest { count: 10 }).await.unwrap().unwrap();

    let result = tracker
        .delete_attempt(&DeleteAttempt {
            id: stored.id,
            confirmed: false,
        })
        .await;
    assert!(matches!(result, Err(TrackerError::InvalidInput { .. })));
    assert!(tracker.last_attempt().await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_returns_removed_attempt() {
    let tracker = tracker().await;
    let stored = tracker.log_test(&LogTest { count: 10 }).await.unwrap().unwrap();
    let params = DeleteAttempt {
        id: stored.id,
        confirmed: true,
    };

    assert_eq!(tracker.delete_attempt(&params).await.unwrap(), stored);
    assert!(matches!(
        tracker.delete_attempt(&params).await,
        Err(TrackerError::AttemptNotFound { id }) if id == stored.id
    ));
}

#[tokio::test]
async fn test_list_attempts_recent_and_all() {
    let tracker = tracker().await;
    for count in 1..=12 {
        tracker.log_test(&LogTest { count }).await.unwrap();
    }

    let recent = tracker
        .list_attempts(&ListAttempts::default())
        .await
        .unwrap();
    assert_eq!(recent.len(), 10);

    let all = tracker
        .list_attempts(&ListAttempts {
            all: true,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(all.len(), 12);
    assert!(all.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[tokio::test]
async fn test_plan_lookups() {
    let tracker = tracker().await;

    let entry = tracker.find_plan_entry(&key(3, 2, "2")).unwrap();
    assert_eq!((entry.week, entry.day, entry.column.as_str()), (3, 2, "2"));
    assert!(tracker.find_plan_entry(&key(99, 1, "A")).is_none());

    let week = tracker.list_plan(&ListPlan { week: Some(2) });
    assert_eq!(week.len(), 9);
    assert!(week.iter().all(|e| e.week == 2));
    assert_eq!(
        tracker.list_plan(&ListPlan::default()).len(),
        tracker.plan().len()
    );
}

#[tokio::test]
async fn test_home_follows_history() {
    let tracker = tracker().await;
    let home = tracker.home().await.unwrap();
    assert_eq!(home.upcoming_session.as_ref(), tracker.plan().first());

    tracker.log_test(&LogTest { count: 25 }).await.unwrap();
    let home = tracker.home().await.unwrap();
    assert!(home.last_attempt.unwrap().is_test());
    assert_eq!(home.upcoming_session.as_ref(), tracker.plan().first());
}
