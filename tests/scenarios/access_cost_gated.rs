//! Scenario E: the access-cost-barrier factor requires a care-related
//! keyword alongside the cost signal, so a non-care complaint about
//! affordability does not trigger it.

use std::sync::Arc;

use complexity_engine::enums::{EventIntent, EventSaveMode, FactorCode};
use complexity_engine::store::MemoryStore;
use complexity_engine::{ComplexityEngine, ProcessSmartInputRequest};

#[test]
fn groceries_affordability_does_not_trigger_access_cost_barrier() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));

    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I can't afford groceries.",
            EventIntent::Ask,
            EventSaveMode::Transient,
        ))
        .unwrap();

    assert!(!turn.extracted_factors.iter().any(|f| f.code() == FactorCode::AccessCostBarrier));
}

#[test]
fn gp_affordability_triggers_access_cost_barrier() {
    let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));

    let turn = engine
        .process_smart_input(ProcessSmartInputRequest::new(
            "I can't afford the GP.",
            EventIntent::Ask,
            EventSaveMode::Transient,
        ))
        .unwrap();

    assert!(turn.extracted_factors.iter().any(|f| f.code() == FactorCode::AccessCostBarrier));
}
