//! In-memory `Store` adapter, backed by `HashMap`s behind a `Mutex`.
//!
//! Required by §9 design note as one of the two adapters the storage
//! contract must be verifiable against; also the natural choice for
//! fast, deterministic unit tests elsewhere in this crate.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::enums::FactorCode;
use crate::model::{Event, Factor, PendingFollowUp};
use crate::store::{skip_write, StorageError, Store};
use crate::types::EventId;

#[derive(Debug, Default)]
struct MemoryState {
    events: HashMap<EventId, Event>,
    factors: Vec<Factor>,
    suppressed: HashSet<FactorCode>,
    pending: Option<PendingFollowUp>,
    controls: HashMap<String, String>,
}

/// A `Store` backed entirely by in-process memory. Nothing survives
/// past the life of the `MemoryStore` value.
///
/// # Examples
///
/// ```
/// use complexity_engine::store::{MemoryStore, Store};
///
/// let store = MemoryStore::new();
/// assert!(store.get_pending().unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        MemoryStore::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().expect("MemoryStore mutex poisoned")
    }
}

impl Store for MemoryStore {
    fn save_event_and_factors(&self, event: &Event, factors: &[Factor]) -> Result<(), StorageError> {
        if skip_write(event.save_mode()) {
            return Ok(());
        }
        let mut state = self.lock();
        state.events.insert(event.id().clone(), event.clone());
        state.factors.extend(factors.iter().cloned());
        Ok(())
    }

    fn load_all_factors(&self) -> Result<Vec<Factor>, StorageError> {
        Ok(self.lock().factors.clone())
    }

    fn suppress(&self, code: FactorCode) -> Result<(), StorageError> {
        self.lock().suppressed.insert(code);
        Ok(())
    }

    fn unsuppress(&self, code: FactorCode) -> Result<(), StorageError> {
        self.lock().suppressed.remove(&code);
        Ok(())
    }

    fn suppressed_set(&self) -> Result<HashSet<FactorCode>, StorageError> {
        Ok(self.lock().suppressed.clone())
    }

    fn set_pending(&self, pending: PendingFollowUp) -> Result<(), StorageError> {
        self.lock().pending = Some(pending);
        Ok(())
    }

    fn get_pending(&self) -> Result<Option<PendingFollowUp>, StorageError> {
        Ok(self.lock().pending.clone())
    }

    fn clear_pending(&self) -> Result<(), StorageError> {
        self.lock().pending = None;
        Ok(())
    }

    fn get_control(&self, key: &str, default: &str) -> Result<String, StorageError> {
        Ok(self
            .lock()
            .controls
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    fn set_control(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().controls.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{EventIntent, EventSaveMode};
    use crate::types::{Timestamp, Value};

    fn now() -> Timestamp {
        Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn transient_events_are_not_persisted() {
        let store = MemoryStore::new();
        let event = Event::new(EventIntent::Ask, EventSaveMode::Transient, now());
        let factor = Factor::new(FactorCode::SymptomPain, Value::Bool(true), 0.8, event.id().clone(), now());
        store.save_event_and_factors(&event, std::slice::from_ref(&factor)).unwrap();
        assert!(store.load_all_factors().unwrap().is_empty());
    }

    #[test]
    fn save_factors_only_persists_factors() {
        let store = MemoryStore::new();
        let event = Event::new(EventIntent::Ask, EventSaveMode::SaveFactorsOnly, now());
        let factor = Factor::new(FactorCode::SymptomPain, Value::Bool(true), 0.8, event.id().clone(), now());
        store.save_event_and_factors(&event, std::slice::from_ref(&factor)).unwrap();
        assert_eq!(store.load_all_factors().unwrap().len(), 1);
    }

    #[test]
    fn suppression_round_trips() {
        let store = MemoryStore::new();
        store.suppress(FactorCode::SymptomPain).unwrap();
        assert!(store.suppressed_set().unwrap().contains(&FactorCode::SymptomPain));
        store.unsuppress(FactorCode::SymptomPain).unwrap();
        assert!(!store.suppressed_set().unwrap().contains(&FactorCode::SymptomPain));
    }

    #[test]
    fn setting_pending_replaces_prior() {
        let store = MemoryStore::new();
        let parent = EventId::generate();
        store
            .set_pending(PendingFollowUp::new(parent.clone(), "q1", None, now()))
            .unwrap();
        store
            .set_pending(PendingFollowUp::new(parent, "q2", None, now()))
            .unwrap();
        assert_eq!(store.get_pending().unwrap().unwrap().question_text(), "q2");
    }

    #[test]
    fn clear_pending_empties_slot() {
        let store = MemoryStore::new();
        store
            .set_pending(PendingFollowUp::new(EventId::generate(), "q", None, now()))
            .unwrap();
        store.clear_pending().unwrap();
        assert!(store.get_pending().unwrap().is_none());
    }

    #[test]
    fn control_defaults_when_unset() {
        let store = MemoryStore::new();
        assert_eq!(store.get_control("use_saved_context", "true").unwrap(), "true");
        store.set_control("use_saved_context", "false").unwrap();
        assert_eq!(store.get_control("use_saved_context", "true").unwrap(), "false");
    }
}
