//! `PendingFollowUp`: the single-slot follow-up question memory (§3, §4.8).

use crate::types::{EventId, PendingFollowUpId, Timestamp};
use serde::{Deserialize, Serialize};

/// The engine's memory that it is awaiting an answer to a question it
/// asked. At most one row exists system-wide (§4.2, §8 invariant 5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingFollowUp {
    id: PendingFollowUpId,
    parent_event_id: EventId,
    question_text: String,
    missing_info_key: Option<String>,
    created_at: Timestamp,
}

impl PendingFollowUp {
    /// Creates a new pending follow-up.
    #[must_use]
    pub fn new(
        parent_event_id: EventId,
        question_text: impl Into<String>,
        missing_info_key: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        PendingFollowUp {
            id: PendingFollowUpId::generate(),
            parent_event_id,
            question_text: question_text.into(),
            missing_info_key,
            created_at,
        }
    }

    /// Creates a pending follow-up with an explicit ID, for loading
    /// from storage.
    #[must_use]
    pub fn with_id(
        id: PendingFollowUpId,
        parent_event_id: EventId,
        question_text: impl Into<String>,
        missing_info_key: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        PendingFollowUp {
            id,
            parent_event_id,
            question_text: question_text.into(),
            missing_info_key,
            created_at,
        }
    }

    /// This row's identifier.
    #[must_use]
    pub fn id(&self) -> &PendingFollowUpId {
        &self.id
    }

    /// The event that asked the question this row is waiting on an
    /// answer to.
    #[must_use]
    pub fn parent_event_id(&self) -> &EventId {
        &self.parent_event_id
    }

    /// The question text, passed to the classifier as
    /// `previous_question` on the next turn (§4.3 step 4).
    #[must_use]
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    /// The `MissingInfo` key this question was generated from, if any.
    #[must_use]
    pub fn missing_info_key(&self) -> Option<&str> {
        self.missing_info_key.as_deref()
    }

    /// When this row was written.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
