//! The single-slot pending follow-up protocol (§4.8).

use crate::enums::{EventIntent, NextActionKind, RiskBand};
use crate::model::{Event, MissingInfo, PendingFollowUp, StateSnapshot};
use crate::store::{StorageError, Store};
use crate::types::EventId;

/// The effective intent and follow-up context a turn should run with,
/// after consulting any pending row (§4.8 step 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIntent {
    /// The intent the turn should classify and build its event with.
    /// Forced to `FollowUp` whenever a pending row exists, regardless
    /// of the caller-requested intent.
    pub intent: EventIntent,
    /// The prior turn's question text, passed to the classifier as
    /// `previous_question` (§4.3 step 4).
    pub previous_question: Option<String>,
    /// The event that asked the pending question, recorded as the new
    /// event's `parent_event_id`.
    pub parent_event_id: Option<EventId>,
}

/// Reads the pending row (if any) and resolves the effective intent
/// for this turn (§4.8 step 1).
///
/// # Errors
///
/// Returns `StorageError` if the backing store is unavailable.
pub fn resolve_pending(store: &dyn Store, requested_intent: EventIntent) -> Result<ResolvedIntent, StorageError> {
    match store.get_pending()? {
        Some(pending) => Ok(ResolvedIntent {
            intent: EventIntent::FollowUp,
            previous_question: Some(pending.question_text().to_string()),
            parent_event_id: Some(pending.parent_event_id().clone()),
        }),
        None => Ok(ResolvedIntent { intent: requested_intent, previous_question: None, parent_event_id: None }),
    }
}

/// Clears the pending row unconditionally, then writes a new one if
/// this turn asks a follow-up question of its own (§4.8 step 2).
///
/// # Errors
///
/// Returns `StorageError` if the backing store is unavailable.
pub fn update_pending(
    store: &dyn Store,
    event: &Event,
    snapshot: &StateSnapshot,
    missing_info: &[MissingInfo],
) -> Result<(), StorageError> {
    store.clear_pending()?;

    let should_set = snapshot.next_action_kind() == NextActionKind::AskFollowup
        && snapshot.risk_band() != RiskBand::Urgent
        && event.intent() != EventIntent::LogOnly;

    if !should_set {
        return Ok(());
    }

    let Some(question) = snapshot.followup_question() else {
        return Ok(());
    };

    let missing_info_key = missing_info.iter().max_by_key(|mi| mi.priority()).map(|mi| mi.key().to_string());

    store.set_pending(PendingFollowUp::new(event.id().clone(), question, missing_info_key, event.created_at()))
}
