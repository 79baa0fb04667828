//! The immutable per-invocation `Event` record (§3).

use crate::enums::{EventIntent, EventSaveMode};
use crate::types::{EventId, Timestamp};
use serde::{Deserialize, Serialize};

/// One invocation of `process_smart_input`. Immutable once created.
///
/// `raw_text` is only ever populated when `save_mode = SaveJournal`
/// (§3 ownership/lifecycle); callers should not assume it is present
/// even when the originating text was non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    created_at: Timestamp,
    parent_event_id: Option<EventId>,
    intent: EventIntent,
    save_mode: EventSaveMode,
    raw_text: Option<String>,
}

impl Event {
    /// Creates a new event with a freshly generated ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use complexity_engine::enums::{EventIntent, EventSaveMode};
    /// use complexity_engine::model::Event;
    /// use complexity_engine::types::Timestamp;
    ///
    /// let now = Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap();
    /// let event = Event::new(EventIntent::Ask, EventSaveMode::Transient, now);
    /// assert!(event.id().as_str().starts_with("evt_"));
    /// ```
    #[must_use]
    pub fn new(intent: EventIntent, save_mode: EventSaveMode, created_at: Timestamp) -> Self {
        Event {
            id: EventId::generate(),
            created_at,
            parent_event_id: None,
            intent,
            save_mode,
            raw_text: None,
        }
    }

    /// Creates an event with an explicit ID, for loading from storage
    /// or deterministic tests.
    #[must_use]
    pub fn with_id(
        id: EventId,
        intent: EventIntent,
        save_mode: EventSaveMode,
        created_at: Timestamp,
    ) -> Self {
        Event {
            id,
            created_at,
            parent_event_id: None,
            intent,
            save_mode,
            raw_text: None,
        }
    }

    /// Sets the parent follow-up event, consuming and returning `self`.
    #[must_use]
    pub fn with_parent_event_id(mut self, parent_event_id: EventId) -> Self {
        self.parent_event_id = Some(parent_event_id);
        self
    }

    /// Attaches the raw text, consuming and returning `self`. Callers
    /// must only do this when `save_mode = SaveJournal` (§3).
    #[must_use]
    pub fn with_raw_text(mut self, raw_text: impl Into<String>) -> Self {
        self.raw_text = Some(raw_text.into());
        self
    }

    /// The event's unique identifier.
    #[must_use]
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// When the event was created.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// The event that this one answers, if this turn consumed a
    /// pending follow-up.
    #[must_use]
    pub fn parent_event_id(&self) -> Option<&EventId> {
        self.parent_event_id.as_ref()
    }

    /// The effective intent for this turn.
    #[must_use]
    pub fn intent(&self) -> EventIntent {
        self.intent
    }

    /// The save mode governing persistence for this turn.
    #[must_use]
    pub fn save_mode(&self) -> EventSaveMode {
        self.save_mode
    }

    /// The raw input text, if persisted.
    #[must_use]
    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }
}
