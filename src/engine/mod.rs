//! The top-level engine facade: `ComplexityEngine::process_smart_input`
//! (§2 flow, §6 external interface), `EngineConfig`, `EngineError`.

mod config;
mod error;
mod facade;

pub use config::EngineConfig;
pub use error::EngineError;
pub use facade::{ComplexityEngine, DebugModel, ProcessSmartInputRequest, ProcessedTurn, SnapshotBands, Toggles};
