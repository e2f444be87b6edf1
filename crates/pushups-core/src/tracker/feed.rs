//! Reactive query subscriptions.

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

use super::Tracker;
use crate::{error::Result, store::AttemptStore};

type Query<T> = Arc<dyn Fn(&dyn AttemptStore) -> Result<T> + Send + Sync>;

/// A restartable, unbounded sequence of query snapshots.
///
/// The first [`Feed::next`] returns the current result straight away; every
/// later call waits for the next completed store write and re-runs the
/// query. Writes that land while a query is running are folded into the
/// following snapshot, so a slow consumer never falls behind.
pub struct Feed<T> {
    tracker: Tracker,
    revisions: watch::Receiver<u64>,
    query: Query<T>,
    primed: bool,
}

impl<T: Send + 'static> Feed<T> {
    pub(super) fn new<F>(tracker: Tracker, query: F) -> Self
    where
        F: Fn(&dyn AttemptStore) -> Result<T> + Send + Sync + 'static,
    {
        let revisions = tracker.revision.subscribe();
        Self {
            tracker,
            revisions,
            query: Arc::new(query),
            primed: false,
        }
    }

    /// Next snapshot. `None` only if the tracker's change channel closed,
    /// which cannot happen while this feed holds a tracker clone.
    pub async fn next(&mut self) -> Option<Result<T>> {
        if self.primed {
            self.revisions.changed().await.ok()?;
        }
        self.primed = true;

        let revision = *self.revisions.borrow_and_update();
        debug!("Re-running feed query at revision {revision}");

        let query = Arc::clone(&self.query);
        Some(self.tracker.with_store(move |store| query(store)).await)
    }

    /// Starts over: the next call returns a fresh snapshot without waiting
    /// for a change.
    pub fn restart(&mut self) {
        self.primed = false;
    }
}
