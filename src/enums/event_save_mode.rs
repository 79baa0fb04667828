//! How much of a turn is allowed to persist.

use serde::{Deserialize, Serialize};

/// Governs what, if anything, a turn writes to the store (§4.2, §8.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventSaveMode {
    /// Nothing is written: no event, no factors, no raw text.
    Transient,
    /// The event, its factors, and the raw input text are all persisted.
    SaveJournal,
    /// The event and its factors are persisted; raw text is not.
    SaveFactorsOnly,
}

impl EventSaveMode {
    /// Stable identifier used in persistence.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            EventSaveMode::Transient => "transient",
            EventSaveMode::SaveJournal => "save_journal",
            EventSaveMode::SaveFactorsOnly => "save_factors_only",
        }
    }

    /// Parses the stable identifier back into an `EventSaveMode`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "transient" => Some(EventSaveMode::Transient),
            "save_journal" => Some(EventSaveMode::SaveJournal),
            "save_factors_only" => Some(EventSaveMode::SaveFactorsOnly),
            _ => None,
        }
    }

    /// Whether anything at all is written for this mode.
    #[must_use]
    pub const fn persists_anything(&self) -> bool {
        !matches!(self, EventSaveMode::Transient)
    }

    /// Whether the raw input text is written alongside factors.
    #[must_use]
    pub const fn persists_raw_text(&self) -> bool {
        matches!(self, EventSaveMode::SaveJournal)
    }
}
