//! `EngineError`: the top-level `InvalidInput` / `StorageError` /
//! `CorruptState` triad (§7).
//!
//! Hand-written `enum` + `Display` + `Error`, matching the teacher's
//! construction-error idiom (`IdError`, `EntityBuildError`) rather
//! than reaching for `thiserror`.

use std::fmt;

use crate::store::StorageError;

/// A fatal error aborting the current turn, or (for `CorruptState`) a
/// non-fatal recoverable condition the caller may still want to know
/// about (§7).
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Empty text, or an unsupported intent/save-mode string reached
    /// the engine boundary. Caller error; the turn is aborted and no
    /// state changes (§7).
    InvalidInput(String),
    /// The backing store was unavailable or a write failed. Fatal for
    /// the current turn; no partial write is committed (§7).
    Storage(StorageError),
    /// The pending row referenced an unknown event, or a factor row
    /// carried an unknown code/domain. Non-fatal: the offending row is
    /// skipped and logged at debug level rather than surfaced here —
    /// this variant exists for store implementations that choose to
    /// report rather than silently skip (§7).
    CorruptState(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            EngineError::Storage(err) => write!(f, "{err}"),
            EngineError::CorruptState(reason) => write!(f, "corrupt state: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<StorageError> for EngineError {
    fn from(err: StorageError) -> Self {
        EngineError::Storage(err)
    }
}
