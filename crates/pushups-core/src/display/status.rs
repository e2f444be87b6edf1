//! Status messages for operation feedback.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Success,
    Notice,
    Failure,
}

/// One-line outcome of a command that has nothing richer to show.
pub struct OperationStatus {
    pub message: String,
    kind: StatusKind,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Success)
    }

    /// Something was deliberately not done, e.g. an ignored input.
    pub fn notice(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Notice)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Failure)
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }

    fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Notice => "Note:",
            StatusKind::Failure => "Error:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}
