//! Scenario C: a safety-risk phrase short-circuits classification and
//! routes straight to urgent care with no pending row.

use std::sync::Arc;

use complexity_engine::enums::{ComplexityDomain, EventIntent, EventSaveMode, NextActionKind, NextStepCategory, ResponseMode, RiskBand};
use complexity_engine::store::MemoryStore;
use complexity_engine::{ComplexityEngine, ProcessSmartInputRequest};

#[test]
fn chest_pain_and_breathlessness_escalates_to_urgent_care() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));

    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "Severe chest pain and trouble breathing.",
            EventIntent::Ask,
            EventSaveMode::Transient,
        ))
        .unwrap();

    assert_eq!(turn.domain_result.primary().domain(), ComplexityDomain::SafetyRisk);
    assert!((turn.domain_result.primary().confidence() - 0.9).abs() < f64::EPSILON);
    assert_eq!(turn.snapshot.risk_band(), RiskBand::Urgent);
    assert_eq!(turn.snapshot.next_action_kind(), NextActionKind::SafetyEscalation);
    assert_eq!(turn.response_model.mode, ResponseMode::SafetyEscalation);
    assert_eq!(turn.response_model.next_step.as_ref().unwrap().category, NextStepCategory::UrgentCareEd);
    assert!(turn.response_model.safety_net.is_some());
    assert!(engine.get_pending_follow_up().unwrap().is_none());
}
