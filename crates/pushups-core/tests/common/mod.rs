use std::sync::Arc;

use pushups_core::{MemoryAttemptStore, PlanTable, Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Small plan with short rests so timer tests stay readable.
pub const QUICK_PLAN: &str = "\
Week,Day,Column,Set1,Set2,Set3,SetFinal,RecommendedRest
1,1,1,5,6,4,MAX≥6,3s
1,2,1,6,6,5,MAX≥7,2-4s
1,3,1,8,8,6,MAX≥8,0s
2,1,1,10,10,8,MAX≥10,3s
";

/// Helper function to create a tracker backed by a temporary database
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_plan(PlanTable::load(QUICK_PLAN))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Tracker over an in-memory store, for tests running on a paused clock.
pub async fn create_memory_tracker() -> Tracker {
    TrackerBuilder::new()
        .with_store(Arc::new(MemoryAttemptStore::new()))
        .with_plan(PlanTable::load(QUICK_PLAN))
        .build()
        .await
        .expect("Failed to create tracker")
}
