//! The `Store` trait: the engine's persistence contract (§4.2).
//!
//! Any embedded durable KV or SQL store can satisfy this contract; two
//! adapters are required for testing (§9 design note): an in-memory
//! map ([`crate::store::MemoryStore`]) and a file-backed store
//! ([`crate::store::SledStore`]).

use std::collections::HashSet;

use crate::enums::{EventSaveMode, FactorCode};
use crate::model::{Event, Factor, PendingFollowUp};
use crate::store::StorageError;

/// The durable persistence contract used by the engine (§4.2).
///
/// Implementations must make `save_event_and_factors` atomic: either
/// the event and all of its factors become visible to subsequent
/// calls, or none do (§5).
pub trait Store: Send + Sync {
    /// Atomically persists `event` and `factors` together. A no-op
    /// that still returns `Ok(())` when `event.save_mode() ==
    /// EventSaveMode::Transient` (§3, §4.2).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable or
    /// the write fails.
    fn save_event_and_factors(&self, event: &Event, factors: &[Factor]) -> Result<(), StorageError>;

    /// Returns every persisted factor, across all events.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    fn load_all_factors(&self) -> Result<Vec<Factor>, StorageError>;

    /// Adds `code` to the suppression set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    fn suppress(&self, code: FactorCode) -> Result<(), StorageError>;

    /// Removes `code` from the suppression set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    fn unsuppress(&self, code: FactorCode) -> Result<(), StorageError>;

    /// Returns the current suppression set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    fn suppressed_set(&self) -> Result<HashSet<FactorCode>, StorageError>;

    /// Replaces any existing pending follow-up row with `pending`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    fn set_pending(&self, pending: PendingFollowUp) -> Result<(), StorageError>;

    /// Returns the current pending follow-up row, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    fn get_pending(&self) -> Result<Option<PendingFollowUp>, StorageError>;

    /// Clears the pending follow-up row, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    fn clear_pending(&self) -> Result<(), StorageError>;

    /// Reads a control value, falling back to `default` if unset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    fn get_control(&self, key: &str, default: &str) -> Result<String, StorageError>;

    /// Writes a control value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    fn set_control(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Returns `true` if `save_mode` means nothing should be written
/// (§3, §4.2).
#[must_use]
pub fn skip_write(save_mode: EventSaveMode) -> bool {
    !save_mode.persists_anything()
}
