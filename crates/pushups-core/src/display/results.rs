//! Result wrapper types for write confirmations.

use std::fmt;

use crate::models::Attempt;

/// Confirmation for a newly stored attempt.
///
/// ```rust
/// use jiff::Timestamp;
/// use pushups_core::{display::LoggedResult, NewAttempt};
///
/// let stored = NewAttempt::test(25, Timestamp::now()).unwrap().with_id(3);
/// let output = LoggedResult::new(stored).to_string();
/// assert!(output.starts_with("Logged attempt with ID: 3"));
/// ```
pub struct LoggedResult<T> {
    pub resource: T,
}

impl<T> LoggedResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for LoggedResult<Attempt> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logged attempt with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Confirmation for a permanently removed record.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Attempt> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted attempt with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
