//! Attempt history operations.

use jiff::Timestamp;
use log::{debug, info, warn};
use tokio::task::JoinHandle;

use super::{Feed, Tracker};
use crate::{
    error::{Result, TrackerError},
    home::HomeProjection,
    models::{Attempt, NewAttempt, Outcome},
    params::{DeleteAttempt, Id, ListAttempts, LogTest},
};

impl Tracker {
    /// Stores a new attempt and notifies subscribers.
    pub async fn insert_attempt(&self, attempt: NewAttempt) -> Result<Attempt> {
        let stored = self
            .with_store(move |store| store.insert(&attempt))
            .await?;
        debug!(
            "Stored attempt {} ({})",
            stored.id,
            stored.outcome.as_str()
        );
        self.notify_changed();
        Ok(stored)
    }

    /// Writes `attempt` in the background. The handle resolves to the stored
    /// record, or `None` if the write failed; failures are logged, not
    /// retried.
    pub(crate) fn spawn_record(&self, attempt: NewAttempt) -> JoinHandle<Option<Attempt>> {
        let tracker = self.clone();
        tokio::spawn(async move {
            match tracker.insert_attempt(attempt).await {
                Ok(stored) => Some(stored),
                Err(e) => {
                    warn!("Failed to store attempt: {e}");
                    None
                }
            }
        })
    }

    /// Logs a standalone max-rep test. Counts of zero or less are ignored
    /// and return `None`.
    pub async fn log_test(&self, params: &LogTest) -> Result<Option<Attempt>> {
        let Some(attempt) = NewAttempt::test(params.count, Timestamp::now()) else {
            debug!("Ignoring test with {} pushups", params.count);
            return Ok(None);
        };
        let stored = self.insert_attempt(attempt).await?;
        info!("Logged test of {} pushups", params.count);
        Ok(Some(stored))
    }

    /// Retrieves an attempt by its ID.
    pub async fn get_attempt(&self, params: &Id) -> Result<Option<Attempt>> {
        let id = params.id;
        self.with_store(move |store| store.get(id)).await
    }

    /// Permanently deletes an attempt and returns what was removed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if `confirmed` is false
    /// Returns `TrackerError::AttemptNotFound` if no attempt has that ID
    pub async fn delete_attempt(&self, params: &DeleteAttempt) -> Result<Attempt> {
        if !params.confirmed {
            return Err(TrackerError::invalid_input("confirmed").with_reason(
                "Attempt deletion requires explicit confirmation and cannot be undone",
            ));
        }

        let id = params.id;
        let attempt = self
            .get_attempt(&Id { id })
            .await?
            .ok_or(TrackerError::AttemptNotFound { id })?;

        if self.with_store(move |store| store.delete(id)).await? {
            info!("Deleted attempt {id}");
            self.notify_changed();
        }
        Ok(attempt)
    }

    /// Lists attempts: the most recent ones newest first, or with `all`
    /// every attempt oldest first.
    pub async fn list_attempts(&self, params: &ListAttempts) -> Result<Vec<Attempt>> {
        let (all, limit) = (params.all, params.limit);
        self.with_store(move |store| {
            if all {
                store.all_ascending()
            } else {
                store.recent(limit)
            }
        })
        .await
    }

    /// Same selection as [`Tracker::list_attempts`], as pretty-printed JSON.
    pub async fn export_attempts(&self, params: &ListAttempts) -> Result<String> {
        let attempts = self.list_attempts(params).await?;
        Ok(serde_json::to_string_pretty(&attempts)?)
    }

    /// The newest attempt of any kind.
    pub async fn last_attempt(&self) -> Result<Option<Attempt>> {
        self.with_store(|store| store.last()).await
    }

    /// The newest attempt that was not a max-rep test.
    pub async fn last_normal_attempt(&self) -> Result<Option<Attempt>> {
        self.with_store(|store| store.last_excluding_outcome(Outcome::Test))
            .await
    }

    /// Current home view.
    pub async fn home(&self) -> Result<HomeProjection> {
        let plan = self.plan.clone();
        self.with_store(move |store| HomeProjection::load(store, &plan))
            .await
    }

    /// Home view, re-derived after every store change.
    pub fn subscribe_home(&self) -> Feed<HomeProjection> {
        let plan = self.plan.clone();
        Feed::new(self.clone(), move |store| HomeProjection::load(store, &plan))
    }

    /// Most recent attempts, newest first, re-queried after every change.
    pub fn subscribe_recent(&self, limit: usize) -> Feed<Vec<Attempt>> {
        Feed::new(self.clone(), move |store| store.recent(limit))
    }

    /// Full history, oldest first, re-queried after every change.
    pub fn subscribe_all(&self) -> Feed<Vec<Attempt>> {
        Feed::new(self.clone(), |store| store.all_ascending())
    }
}
