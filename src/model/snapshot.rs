//! `StateSnapshot`: the per-turn derived decision summary (§3, §4.6).

use crate::enums::{EventIntent, FrictionBand, NextActionKind, RiskBand, UncertaintyBand};
use crate::model::UsedFactor;
use crate::types::{EventId, Timestamp};

/// The per-turn derived state, from which the router (§4.7) and
/// response assembler (§4.9) take their inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    event_id: EventId,
    created_at: Timestamp,
    intent: EventIntent,
    risk_band: RiskBand,
    friction_band: FrictionBand,
    uncertainty_band: UncertaintyBand,
    next_action_kind: NextActionKind,
    what_matters: Vec<String>,
    followup_question: Option<String>,
    safety_copy: Option<String>,
    used_factors: Vec<UsedFactor>,
}

impl StateSnapshot {
    /// Assembles a snapshot from its already-computed parts. Used by
    /// the snapshot builder (§4.6).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        event_id: EventId,
        created_at: Timestamp,
        intent: EventIntent,
        risk_band: RiskBand,
        friction_band: FrictionBand,
        uncertainty_band: UncertaintyBand,
        next_action_kind: NextActionKind,
        what_matters: Vec<String>,
        followup_question: Option<String>,
        safety_copy: Option<String>,
        used_factors: Vec<UsedFactor>,
    ) -> Self {
        StateSnapshot {
            event_id,
            created_at,
            intent,
            risk_band,
            friction_band,
            uncertainty_band,
            next_action_kind,
            what_matters,
            followup_question,
            safety_copy,
            used_factors,
        }
    }

    /// The event this snapshot was built for.
    #[must_use]
    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// When this snapshot was built.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// The event's intent.
    #[must_use]
    pub fn intent(&self) -> EventIntent {
        self.intent
    }

    /// The risk band (§4.6 step 1).
    #[must_use]
    pub fn risk_band(&self) -> RiskBand {
        self.risk_band
    }

    /// The friction band (§4.6 step 3).
    #[must_use]
    pub fn friction_band(&self) -> FrictionBand {
        self.friction_band
    }

    /// The uncertainty band (§4.6 step 2).
    #[must_use]
    pub fn uncertainty_band(&self) -> UncertaintyBand {
        self.uncertainty_band
    }

    /// The decided next-action kind (§4.6 step 6).
    #[must_use]
    pub fn next_action_kind(&self) -> NextActionKind {
        self.next_action_kind
    }

    /// The 1–3 "what matters" bullets (§4.6 step 4).
    #[must_use]
    pub fn what_matters(&self) -> &[String] {
        &self.what_matters
    }

    /// The follow-up question, present only when `next_action_kind =
    /// AskFollowup`.
    #[must_use]
    pub fn followup_question(&self) -> Option<&str> {
        self.followup_question.as_deref()
    }

    /// The fixed safety-net copy, present only when `next_action_kind
    /// = SafetyEscalation`.
    #[must_use]
    pub fn safety_copy(&self) -> Option<&str> {
        self.safety_copy.as_deref()
    }

    /// The deduplicated, order-preserving list of factors consulted
    /// while building this snapshot (§4.6 step 5).
    #[must_use]
    pub fn used_factors(&self) -> &[UsedFactor] {
        &self.used_factors
    }
}
