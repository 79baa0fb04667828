//! Scenario B: a follow-up turn binds to the pending question's
//! domain and clears the pending row.

use std::sync::Arc;

use complexity_engine::enums::{ComplexityDomain, EventIntent, EventSaveMode, FactorCode, UncertaintyBand};
use complexity_engine::store::MemoryStore;
use complexity_engine::{ComplexityEngine, ProcessSmartInputRequest};

#[test]
fn duration_answer_completes_the_pending_question() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));

    engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I've got a headache.",
            EventIntent::Ask,
            EventSaveMode::SaveJournal,
        ))
        .unwrap();
    assert!(engine.get_pending_follow_up().unwrap().is_some());

    let turn = engine
        .process_smart_input(
            ProcessSmartInputRequest::new("For weeks.", EventIntent::Ask, EventSaveMode::SaveJournal).with_debug(),
        )
        .unwrap();

    assert_eq!(turn.event.intent(), EventIntent::FollowUp);
    assert_eq!(turn.domain_result.primary().domain(), ComplexityDomain::DurationPattern);
    assert!(turn.extracted_factors.iter().any(|f| f.code() == FactorCode::DurationDaysWeeks));
    assert_ne!(turn.snapshot.uncertainty_band(), UncertaintyBand::High);
    assert!(engine.get_pending_follow_up().unwrap().is_none());
}
