//! Attempt storage abstraction.
//!
//! The session engine, the home projection and the test logger only ever talk
//! to an [`AttemptStore`]. Two implementations are provided:
//!
//! - [`SqliteAttemptStore`]: the durable store used by the CLI, backed by
//!   [`Database`]
//! - [`MemoryAttemptStore`]: a process-local store for tests and embedding
//!
//! Store methods are blocking. [`crate::Tracker`] runs them on the blocking
//! thread pool and publishes a new revision after every completed write.

use std::{
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::{Attempt, NewAttempt, Outcome},
};

/// Number of attempts returned by the default "recent" query.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Ordered persistence of attempt records.
///
/// Implementations serialize their own writes. Ordering is by timestamp,
/// with insertion order breaking ties.
pub trait AttemptStore: Send + Sync {
    /// Stores a new attempt and returns it with its assigned ID.
    fn insert(&self, attempt: &NewAttempt) -> Result<Attempt>;

    /// Removes an attempt by ID. Returns `false` when it was already gone.
    fn delete(&self, id: u64) -> Result<bool>;

    /// Looks up one attempt by ID.
    fn get(&self, id: u64) -> Result<Option<Attempt>>;

    /// Every attempt, oldest first.
    fn all_ascending(&self) -> Result<Vec<Attempt>>;

    /// Up to `limit` attempts, newest first.
    fn recent(&self, limit: usize) -> Result<Vec<Attempt>>;

    /// The newest attempt, if any.
    fn last(&self) -> Result<Option<Attempt>>;

    /// The newest attempt whose outcome is not `excluded`.
    fn last_excluding_outcome(&self, excluded: Outcome) -> Result<Option<Attempt>>;
}

/// SQLite-backed store that opens the database file per operation.
#[derive(Debug, Clone)]
pub struct SqliteAttemptStore {
    db_path: PathBuf,
}

impl SqliteAttemptStore {
    /// Opens (creating if needed) the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        Database::new(&db_path)?;
        Ok(Self { db_path })
    }

    fn database(&self) -> Result<Database> {
        Database::new(&self.db_path)
    }
}

impl AttemptStore for SqliteAttemptStore {
    fn insert(&self, attempt: &NewAttempt) -> Result<Attempt> {
        self.database()?.insert_attempt(attempt)
    }

    fn delete(&self, id: u64) -> Result<bool> {
        self.database()?.delete_attempt(id)
    }

    fn get(&self, id: u64) -> Result<Option<Attempt>> {
        self.database()?.get_attempt(id)
    }

    fn all_ascending(&self) -> Result<Vec<Attempt>> {
        self.database()?.list_attempts()
    }

    fn recent(&self, limit: usize) -> Result<Vec<Attempt>> {
        self.database()?.recent_attempts(limit)
    }

    fn last(&self) -> Result<Option<Attempt>> {
        self.database()?.last_attempt()
    }

    fn last_excluding_outcome(&self, excluded: Outcome) -> Result<Option<Attempt>> {
        self.database()?.last_attempt_excluding(excluded)
    }
}

/// In-memory store keeping attempts in insertion order.
#[derive(Debug, Default)]
pub struct MemoryAttemptStore {
    inner: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    next_id: u64,
    attempts: Vec<Attempt>,
}

impl MemoryAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.inner.lock().map_err(|_| TrackerError::Configuration {
            message: "Attempt store lock poisoned".to_string(),
        })
    }

    /// Newest-first view; stable sort keeps insertion order among equal
    /// timestamps, which the reversal turns into newest-inserted first.
    fn newest_first(state: &MemoryState) -> Vec<Attempt> {
        let mut attempts = state.attempts.clone();
        attempts.sort_by_key(|a| a.timestamp);
        attempts.reverse();
        attempts
    }
}

impl AttemptStore for MemoryAttemptStore {
    fn insert(&self, attempt: &NewAttempt) -> Result<Attempt> {
        if attempt.sets_completed.is_empty() {
            return Err(TrackerError::invalid_input("sets_completed")
                .with_reason("an attempt needs at least one set"));
        }
        let mut state = self.lock()?;
        state.next_id += 1;
        let stored = attempt.clone().with_id(state.next_id);
        state.attempts.push(stored.clone());
        Ok(stored)
    }

    fn delete(&self, id: u64) -> Result<bool> {
        let mut state = self.lock()?;
        let before = state.attempts.len();
        state.attempts.retain(|a| a.id != id);
        Ok(state.attempts.len() < before)
    }

    fn get(&self, id: u64) -> Result<Option<Attempt>> {
        Ok(self.lock()?.attempts.iter().find(|a| a.id == id).cloned())
    }

    fn all_ascending(&self) -> Result<Vec<Attempt>> {
        let state = self.lock()?;
        let mut attempts = state.attempts.clone();
        attempts.sort_by_key(|a| a.timestamp);
        Ok(attempts)
    }

    fn recent(&self, limit: usize) -> Result<Vec<Attempt>> {
        let state = self.lock()?;
        Ok(Self::newest_first(&state).into_iter().take(limit).collect())
    }

    fn last(&self) -> Result<Option<Attempt>> {
        Ok(self.recent(1)?.into_iter().next())
    }

    fn last_excluding_outcome(&self, excluded: Outcome) -> Result<Option<Attempt>> {
        let state = self.lock()?;
        Ok(Self::newest_first(&state)
            .into_iter()
            .find(|a| a.outcome != excluded))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn new_attempt(second: i64, outcome: Outcome) -> NewAttempt {
        NewAttempt {
            timestamp: Timestamp::from_second(second).unwrap(),
            week: 1,
            day: 1,
            column: "1".to_string(),
            outcome,
            sets_completed: vec![5, 5],
        }
    }

    #[test]
    fn test_memory_store_orders_by_timestamp() {
        let store = MemoryAttemptStore::new();
        store.insert(&new_attempt(300, Outcome::Success)).unwrap();
        store.insert(&new_attempt(100, Outcome::Partial)).unwrap();
        store.insert(&new_attempt(200, Outcome::Test)).unwrap();

        let ascending: Vec<i64> = store
            .all_ascending()
            .unwrap()
            .iter()
            .map(|a| a.timestamp.as_second())
            .collect();
        assert_eq!(ascending, [100, 200, 300]);

        assert_eq!(store.last().unwrap().unwrap().timestamp.as_second(), 300);
        assert_eq!(store.recent(2).unwrap().len(), 2);
    }

    #[test]
    fn test_memory_store_ties_prefer_latest_insert() {
        let store = MemoryAttemptStore::new();
        let first = store.insert(&new_attempt(100, Outcome::Success)).unwrap();
        let second = store.insert(&new_attempt(100, Outcome::Test)).unwrap();

        assert_eq!(store.last().unwrap().unwrap().id, second.id);
        assert_eq!(
            store
                .last_excluding_outcome(Outcome::Test)
                .unwrap()
                .unwrap()
                .id,
            first.id
        );
    }

    #[test]
    fn test_memory_store_delete_is_idempotent() {
        let store = MemoryAttemptStore::new();
        let stored = store.insert(&new_attempt(100, Outcome::Success)).unwrap();
        assert_eq!(store.get(stored.id).unwrap(), Some(stored.clone()));
        assert!(store.delete(stored.id).unwrap());
        assert!(!store.delete(stored.id).unwrap());
        assert!(store.get(stored.id).unwrap().is_none());
        assert!(store.last().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_rejects_empty_sets() {
        let store = MemoryAttemptStore::new();
        let mut attempt = new_attempt(100, Outcome::Success);
        attempt.sets_completed.clear();
        assert!(store.insert(&attempt).is_err());
    }
}
