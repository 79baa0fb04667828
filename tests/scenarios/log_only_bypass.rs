//! Scenario D: a `log_only` turn is acknowledged without asking a
//! follow-up, even though the same text would ask one under `ask`.

use std::sync::Arc;

use complexity_engine::enums::{EventIntent, EventSaveMode, FactorCode, NextActionKind};
use complexity_engine::store::MemoryStore;
use complexity_engine::{ComplexityEngine, ProcessSmartInputRequest};

#[test]
fn log_only_intent_skips_the_followup_question() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));

    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I've got a headache.",
            EventIntent::LogOnly,
            EventSaveMode::SaveFactorsOnly,
        ))
        .unwrap();

    assert_eq!(turn.snapshot.next_action_kind(), NextActionKind::LogOnly);
    assert!(engine.get_pending_follow_up().unwrap().is_none());
    assert!(turn.extracted_factors.iter().any(|f| f.code() == FactorCode::SymptomHeadache));
}
