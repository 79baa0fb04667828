//! Scenario F: suppressing a factor code removes it from the
//! snapshot, the profile, and the response chips; unsuppressing
//! restores it.

use std::sync::Arc;

use complexity_engine::enums::{EventIntent, EventSaveMode, FactorCode};
use complexity_engine::store::MemoryStore;
use complexity_engine::{ComplexityEngine, ProcessSmartInputRequest};

#[test]
fn suppressing_symptom_pain_hides_it_everywhere_until_unsuppressed() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));
    engine.suppress_factor_code(FactorCode::SymptomPain).unwrap();

    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I have sharp back pain.",
            EventIntent::Ask,
            EventSaveMode::SaveFactorsOnly,
        ))
        .unwrap();

    assert!(!turn.extracted_factors.iter().any(|f| f.code() == FactorCode::SymptomPain));
    assert!(!turn.snapshot.used_factors().iter().any(|f| f.code() == FactorCode::SymptomPain));
    assert!(turn.profile.factor(FactorCode::SymptomPain).is_none());
    assert!(!turn.response_model.what_im_using.chips.iter().any(|c| c.code == FactorCode::SymptomPain));

    engine.unsuppress_factor_code(FactorCode::SymptomPain).unwrap();

    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I have sharp back pain.",
            EventIntent::Ask,
            EventSaveMode::SaveFactorsOnly,
        ))
        .unwrap();

    assert!(turn.extracted_factors.iter().any(|f| f.code() == FactorCode::SymptomPain));
    assert!(turn.profile.factor(FactorCode::SymptomPain).is_some());
}
