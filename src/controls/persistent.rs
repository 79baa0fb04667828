//! The persistent half of user controls: `use_saved_context` (§4.10),
//! stored in the `user_controls` KV (§4.2).

use crate::store::{StorageError, Store};

/// The control-KV key `use_saved_context` is stored under.
pub const USE_SAVED_CONTEXT_KEY: &str = "use_saved_context";

const DEFAULT_USE_SAVED_CONTEXT: bool = true;

/// Reads the persistent `use_saved_context` flag, defaulting to `true`
/// when unset (§3).
///
/// # Errors
///
/// Returns `StorageError` if the backing store is unavailable.
pub fn get_use_saved_context(store: &dyn Store) -> Result<bool, StorageError> {
    let raw = store.get_control(USE_SAVED_CONTEXT_KEY, bool_code(DEFAULT_USE_SAVED_CONTEXT))?;
    Ok(parse_bool(&raw))
}

/// Writes the persistent `use_saved_context` flag.
///
/// # Errors
///
/// Returns `StorageError` if the backing store is unavailable.
pub fn set_use_saved_context(store: &dyn Store, value: bool) -> Result<(), StorageError> {
    store.set_control(USE_SAVED_CONTEXT_KEY, bool_code(value))
}

fn bool_code(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn parse_bool(raw: &str) -> bool {
    raw == "true"
}
