//! Storage error type (§4.2, §7).

use std::fmt;

/// An error from the persistence layer. Per §7, a `StorageError` is
/// fatal for the current turn: the engine aborts and commits nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    /// What operation failed.
    pub operation: &'static str,
    /// Why it failed.
    pub reason: String,
}

impl StorageError {
    /// Builds a storage error for `operation`.
    #[must_use]
    pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        StorageError {
            operation,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage error during {}: {}", self.operation, self.reason)
    }
}

impl std::error::Error for StorageError {}
