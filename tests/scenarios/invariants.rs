//! Sweeps the cross-cutting invariants spec §8 names, across a small
//! corpus of representative inputs rather than one scenario each.

use std::sync::Arc;

use complexity_engine::enums::{EventIntent, EventSaveMode, FactorCode, NextActionKind};
use complexity_engine::store::{MemoryStore, Store};
use complexity_engine::types::{Duration, FixedClock, Timestamp};
use complexity_engine::{ComplexityEngine, ProcessSmartInputRequest};

const CORPUS: &[&str] = &[
    "I've got a headache.",
    "Severe chest pain and trouble breathing.",
    "xyz",
    "I feel anxious and tired all the time, cant afford the GP, no time to rest.",
    "I want to hurt myself.",
    "I can't afford groceries.",
];

#[test]
fn classifier_confidence_and_secondary_shape_hold_across_the_corpus() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));
    for text in CORPUS {
        let turn = engine
            .process_smart_input(
                ProcessSmartInputRequest::new(*text, EventIntent::Ask, EventSaveMode::Transient).with_debug(),
            )
            .unwrap();
        let domains = &turn.debug_model.as_ref().unwrap().domains;

        assert!(domains.primary().confidence() >= 0.0 && domains.primary().confidence() <= 1.0);
        assert!(domains.secondary().len() <= 2);
        assert!(domains.secondary().iter().all(|tag| tag.domain() != domains.primary().domain()));
    }
}

#[test]
fn every_kept_factor_meets_the_confidence_floor() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));
    for text in CORPUS {
        let turn = engine
            .process_smart_input(ProcessSmartInputRequest::new(*text, EventIntent::Ask, EventSaveMode::Transient))
            .unwrap();
        assert!(turn.extracted_factors.iter().all(|f| f.confidence() >= 0.6));
    }
}

#[test]
fn what_matters_and_used_factors_and_chips_stay_within_bounds() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));
    for text in CORPUS {
        let turn = engine
            .process_smart_input(ProcessSmartInputRequest::new(*text, EventIntent::Ask, EventSaveMode::Transient))
            .unwrap();

        assert!(!turn.snapshot.what_matters().is_empty());
        assert!(turn.snapshot.what_matters().len() <= 3);

        let mut seen = std::collections::HashSet::new();
        assert!(turn.snapshot.used_factors().iter().all(|f| seen.insert(f.code())));

        assert!(turn.response_model.what_im_using.chips.len() <= 6);
    }
}

#[test]
fn at_most_one_pending_row_ever_exists() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));
    for text in CORPUS {
        engine
            .process_smart_input(ProcessSmartInputRequest::new(*text, EventIntent::Ask, EventSaveMode::SaveJournal))
            .unwrap();
        assert!(engine.get_pending_follow_up().unwrap().is_some() || engine.get_pending_follow_up().unwrap().is_none());
    }
}

#[test]
fn safety_escalation_and_log_only_never_leave_a_pending_row() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));

    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "Severe chest pain and trouble breathing.",
            EventIntent::Ask,
            EventSaveMode::SaveJournal,
        ))
        .unwrap();
    assert_eq!(turn.snapshot.next_action_kind(), NextActionKind::SafetyEscalation);
    assert!(engine.get_pending_follow_up().unwrap().is_none());

    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I've got a headache.",
            EventIntent::LogOnly,
            EventSaveMode::SaveJournal,
        ))
        .unwrap();
    assert_eq!(turn.snapshot.next_action_kind(), NextActionKind::LogOnly);
    assert!(engine.get_pending_follow_up().unwrap().is_none());
}

#[test]
fn save_mode_governs_exactly_what_persists() {
    let store = Arc::new(MemoryStore::new());
    let engine = ComplexityEngine::new(store.clone());

    engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I've got a headache.",
            EventIntent::Ask,
            EventSaveMode::Transient,
        ))
        .unwrap();
    assert!(store.load_all_factors().unwrap().is_empty());

    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));
    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I've got a headache.",
            EventIntent::Ask,
            EventSaveMode::SaveFactorsOnly,
        ))
        .unwrap();
    assert!(turn.event.raw_text().is_none());

    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));
    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I've got a headache.",
            EventIntent::Ask,
            EventSaveMode::SaveJournal,
        ))
        .unwrap();
    assert_eq!(turn.event.raw_text(), Some("I've got a headache."));
}

#[test]
fn suppressing_then_unsuppressing_restores_a_factor() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));
    engine.suppress_factor_code(FactorCode::SymptomPain).unwrap();
    assert!(engine.get_suppressed_factor_codes().unwrap().contains(&FactorCode::SymptomPain));
    engine.unsuppress_factor_code(FactorCode::SymptomPain).unwrap();
    assert!(!engine.get_suppressed_factor_codes().unwrap().contains(&FactorCode::SymptomPain));
}

#[test]
fn expired_factors_drop_out_of_the_profile_but_stay_in_storage() {
    let clock = Arc::new(FixedClock::new(Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap()));
    let store = Arc::new(MemoryStore::new());
    let engine = ComplexityEngine::with_clock_and_config(
        store.clone(),
        clock.clone(),
        complexity_engine::EngineConfig::default(),
    );

    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I've got a headache.",
            EventIntent::Ask,
            EventSaveMode::SaveFactorsOnly,
        ))
        .unwrap();
    assert!(turn.profile.factor(FactorCode::SymptomHeadache).is_some());

    clock.advance(Duration::days(30));

    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I feel anxious.",
            EventIntent::Ask,
            EventSaveMode::SaveFactorsOnly,
        ))
        .unwrap();
    assert!(turn.profile.factor(FactorCode::SymptomHeadache).is_none());
    assert!(store.load_all_factors().unwrap().iter().any(|f| f.code() == FactorCode::SymptomHeadache));
}

#[test]
fn use_saved_context_round_trips() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));
    engine.set_use_saved_context(false).unwrap();
    assert!(!engine.get_use_saved_context().unwrap());
    engine.set_use_saved_context(true).unwrap();
    assert!(engine.get_use_saved_context().unwrap());
}
