//! The state snapshot builder (C6, §4.6).

use crate::classifier::DomainResult;
use crate::enums::{EventIntent, NextActionKind};
use crate::model::{Event, Factor, MissingInfo, StateSnapshot, UsedFactor};
use crate::snapshot::bands::{friction_band, risk_band, uncertainty_band};
use crate::snapshot::what_matters::what_matters;

/// The fixed safety-escalation copy (§4.6 step 6, §6).
pub const SAFETY_ESCALATION_COPY: &str = "If you are in immediate danger, call 000 or seek urgent care.";

/// Builds a [`StateSnapshot`] for the current turn.
#[must_use]
pub fn build_snapshot(
    event: &Event,
    domain_result: &DomainResult,
    factors: &[Factor],
    missing_info: &[MissingInfo],
) -> StateSnapshot {
    let mut buffer: Vec<&Factor> = Vec::new();

    let (risk, risk_used) = risk_band(domain_result, factors);
    buffer.extend(risk_used);

    let uncertainty = uncertainty_band(missing_info, factors);

    let (friction, friction_used) = friction_band(factors);
    buffer.extend(friction_used);

    let bullets = what_matters(factors);

    let mut seen_codes = std::collections::HashSet::new();
    let used_factors: Vec<UsedFactor> = buffer
        .into_iter()
        .filter(|f| seen_codes.insert(f.code()))
        .map(|f| UsedFactor::new(f.code(), f.domain(), f.confidence()))
        .collect();

    let (next_action_kind, followup_question, safety_copy) = if risk == crate::enums::RiskBand::Urgent {
        (NextActionKind::SafetyEscalation, None, Some(SAFETY_ESCALATION_COPY.to_string()))
    } else if event.intent() == EventIntent::LogOnly {
        (NextActionKind::LogOnly, None, None)
    } else if uncertainty == crate::enums::UncertaintyBand::High && !missing_info.is_empty() {
        let top = missing_info.iter().max_by_key(|mi| mi.priority()).expect("missing_info is non-empty");
        (NextActionKind::AskFollowup, Some(top.question().to_string()), None)
    } else {
        (NextActionKind::Answer, None, None)
    };

    StateSnapshot::new(
        event.id().clone(),
        event.created_at(),
        event.intent(),
        risk,
        friction,
        uncertainty,
        next_action_kind,
        bullets,
        followup_question,
        safety_copy,
        used_factors,
    )
}
