//! Scenario A: a symptom reported with no duration asks a follow-up
//! and leaves exactly one pending row.

use std::sync::Arc;

use complexity_engine::enums::{
    ComplexityDomain, EventIntent, EventSaveMode, FactorCode, NextActionKind, UncertaintyBand,
};
use complexity_engine::store::MemoryStore;
use complexity_engine::{ComplexityEngine, ProcessSmartInputRequest};

#[test]
fn headache_without_duration_asks_how_long() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));

    let turn = engine
        .process_smart_input(
            ProcessSmartInputRequest::new("I've got a headache.", EventIntent::Ask, EventSaveMode::SaveJournal)
                .with_debug(),
        )
        .unwrap();

    assert_eq!(turn.domain_result.primary().domain(), ComplexityDomain::SymptomsBodySignals);
    assert!(turn.extracted_factors.iter().any(|f| f.code() == FactorCode::SymptomHeadache));
    assert_eq!(turn.snapshot.uncertainty_band(), UncertaintyBand::High);
    assert_eq!(turn.snapshot.next_action_kind(), NextActionKind::AskFollowup);
    assert_eq!(turn.snapshot.followup_question(), Some("How long has this been going on?"));
    assert!(engine.get_pending_follow_up().unwrap().is_some());
}
