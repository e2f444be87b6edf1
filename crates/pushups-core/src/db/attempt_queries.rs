//! Attempt CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{decode_sets, encode_sets, Attempt, NewAttempt, Outcome},
};

const ATTEMPT_COLUMNS: &str = "id, timestamp, week, day, plan_column, outcome, sets_completed";

const INSERT_ATTEMPT_SQL: &str = "INSERT INTO attempts (timestamp, week, day, plan_column, outcome, sets_completed) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const DELETE_ATTEMPT_SQL: &str = "DELETE FROM attempts WHERE id = ?1";

impl super::Database {
    /// Stores a new attempt and returns it with its assigned ID.
    pub fn insert_attempt(&mut self, attempt: &NewAttempt) -> Result<Attempt> {
        if attempt.sets_completed.is_empty() {
            return Err(TrackerError::invalid_input("sets_completed")
                .with_reason("an attempt needs at least one set"));
        }

        let millis = attempt.timestamp.as_millisecond();
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_ATTEMPT_SQL,
            params![
                millis,
                attempt.week,
                attempt.day,
                &attempt.column,
                attempt.outcome.as_str(),
                encode_sets(&attempt.sets_completed),
            ],
        )
        .db_context("Failed to insert attempt")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        // Hand back what a later read returns: millisecond precision.
        let mut stored = attempt.clone().with_id(id);
        stored.timestamp = Timestamp::from_millisecond(millis).unwrap_or(attempt.timestamp);
        Ok(stored)
    }

    /// Deletes an attempt. Returns whether a row was removed, so deleting
    /// the same ID twice is harmless.
    pub fn delete_attempt(&mut self, id: u64) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_ATTEMPT_SQL, params![id as i64])
            .db_context("Failed to delete attempt")?;
        Ok(removed > 0)
    }

    /// Retrieves an attempt by its ID.
    pub fn get_attempt(&self, id: u64) -> Result<Option<Attempt>> {
        let sql = format!("SELECT {ATTEMPT_COLUMNS} FROM attempts WHERE id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], attempt_from_row)
            .optional()
            .db_context("Failed to query attempt")
    }

    /// All attempts, oldest first.
    pub fn list_attempts(&self) -> Result<Vec<Attempt>> {
        let sql = format!("SELECT {ATTEMPT_COLUMNS} FROM attempts ORDER BY timestamp ASC, id ASC");
        self.query_attempts(&sql, params![])
    }

    /// The most recent attempts, newest first.
    pub fn recent_attempts(&self, limit: usize) -> Result<Vec<Attempt>> {
        let sql = format!(
            "SELECT {ATTEMPT_COLUMNS} FROM attempts ORDER BY timestamp DESC, id DESC LIMIT ?1"
        );
        self.query_attempts(&sql, params![limit as i64])
    }

    /// The most recent attempt of any kind.
    pub fn last_attempt(&self) -> Result<Option<Attempt>> {
        Ok(self.recent_attempts(1)?.into_iter().next())
    }

    /// The most recent attempt whose outcome is not `excluded`.
    pub fn last_attempt_excluding(&self, excluded: Outcome) -> Result<Option<Attempt>> {
        let sql = format!(
            "SELECT {ATTEMPT_COLUMNS} FROM attempts WHERE outcome != ?1 ORDER BY timestamp DESC, id DESC LIMIT 1"
        );
        self.connection
            .query_row(&sql, params![excluded.as_str()], attempt_from_row)
            .optional()
            .db_context("Failed to query last attempt")
    }

    fn query_attempts(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Attempt>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let attempts = stmt
            .query_map(params, attempt_from_row)
            .db_context("Failed to query attempts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read attempt row")?;

        Ok(attempts)
    }
}

fn attempt_from_row(row: &Row<'_>) -> rusqlite::Result<Attempt> {
    let millis: i64 = row.get(1)?;
    let timestamp = Timestamp::from_millisecond(millis)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Integer, Box::new(e)))?;

    let outcome_str: String = row.get(5)?;
    let outcome = outcome_str.parse::<Outcome>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid outcome: {outcome_str}"),
            )),
        )
    })?;

    Ok(Attempt {
        id: row.get::<_, i64>(0)? as u64,
        timestamp,
        week: row.get(2)?,
        day: row.get(3)?,
        column: row.get(4)?,
        outcome,
        sets_completed: decode_sets(&row.get::<_, String>(6)?),
    })
}
