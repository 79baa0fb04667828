//! Complexity Reasoning Engine
//!
//! A deterministic triage pipeline over free-text wellbeing check-ins:
//! classify the dominant life domain, extract structured factors,
//! aggregate them into a durable profile, derive a per-turn snapshot
//! of risk/friction/uncertainty, and route to a next step.
//!
//! # Core Concepts
//!
//! - **Event**: one invocation of `process_smart_input`, immutable
//!   once created
//! - **Factor**: a single structured signal extracted from text,
//!   tagged with a stable [`enums::FactorCode`]
//! - **ComplexityProfile**: the durable, TTL-decayed aggregate of
//!   factors across turns
//! - **StateSnapshot**: the per-turn derived risk/friction/uncertainty
//!   bands and next-action decision
//! - **Store**: the persistence seam, with in-memory and `sled`-backed
//!   adapters
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use complexity_engine::engine::{ComplexityEngine, ProcessSmartInputRequest};
//! use complexity_engine::enums::{EventIntent, EventSaveMode};
//! use complexity_engine::store::MemoryStore;
//!
//! let engine = ComplexityEngine::new(Arc::new(MemoryStore::new()));
//! let result = engine
//!     .process_smart_input(ProcessSmartInputRequest::new(
//!         "I've got a headache.",
//!         EventIntent::Ask,
//!         EventSaveMode::SaveJournal,
//!     ))
//!     .unwrap();
//!
//! assert!(result.response_model.title.len() > 0);
//! ```
//!
//! # Consumer API Model
//!
//! The consumer API is turn-based: build a [`ComplexityEngine`] over a
//! [`store::Store`], then call
//! [`engine::ComplexityEngine::process_smart_input`] once per user
//! turn. Each call classifies, extracts, persists (subject to the save
//! mode and the two control toggles), and returns the assembled
//! response alongside the structures that produced it.
//!
//! [`ComplexityEngine`]: engine::ComplexityEngine

pub mod classifier;
pub mod controls;
pub mod engine;
pub mod enums;
pub mod extractor;
pub mod followup;
pub mod model;
pub mod profile;
pub mod response;
pub mod router;
pub mod snapshot;
pub mod store;
pub mod taxonomy;
pub mod types;

// Re-export the top-level facade at crate root.
pub use engine::{ComplexityEngine, EngineConfig, EngineError, ProcessSmartInputRequest, ProcessedTurn};

// Re-export the model entities at crate root.
pub use model::{ComplexityProfile, Event, Factor, MissingInfo, PendingFollowUp, StateSnapshot, UsedFactor};

// Re-export the closed enums at crate root.
pub use enums::{
    ComplexityDomain, EventIntent, EventSaveMode, FactorCode, FactorTimeHorizon, FactorType,
    FrictionBand, MissingInfoPriority, NextActionKind, NextStepCategory, ResponseMode, RiskBand,
    UncertaintyBand,
};

// Re-export the storage seam at crate root.
pub use store::{MemoryStore, SledStore, StorageError, Store};

// Re-export the response model at crate root.
pub use response::ResponseModel;
