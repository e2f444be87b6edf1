//! High-level tracker API with async support.
//!
//! [`Tracker`] ties the attempt store, the plan table and guided sessions
//! together. Store calls run on tokio's blocking pool; every completed write
//! bumps a revision counter that [`Feed`]s re-query on.

use std::sync::Arc;

use log::debug;
use tokio::{sync::watch, task};

use crate::{
    error::{Result, TrackerError},
    plan_table::PlanTable,
    store::AttemptStore,
};

mod attempt_ops;
mod builder;
mod feed;
mod session_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;
pub use feed::Feed;

/// Main tracker interface. Cheap to clone; clones share the store, the plan
/// table and the change notifications.
#[derive(Clone)]
pub struct Tracker {
    store: Arc<dyn AttemptStore>,
    plan: Arc<PlanTable>,
    revision: Arc<watch::Sender<u64>>,
}

impl Tracker {
    fn new(store: Arc<dyn AttemptStore>, plan: PlanTable) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            store,
            plan: Arc::new(plan),
            revision: Arc::new(revision),
        }
    }

    /// The immutable plan table this tracker was built with.
    pub fn plan(&self) -> &PlanTable {
        &self.plan
    }

    /// Runs a blocking store call on the blocking thread pool.
    async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&dyn AttemptStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(TrackerError::join)?
    }

    /// Tells every subscriber that the store contents changed.
    fn notify_changed(&self) {
        self.revision.send_modify(|revision| *revision += 1);
        debug!("Attempt store revision {}", *self.revision.borrow());
    }
}
