//! Follow-up Orchestrator (C8, §4.8): single-slot pending-question
//! protocol — consult at the start of a turn, replace or clear at the
//! end.

mod orchestrator;

pub use orchestrator::{resolve_pending, update_pending, ResolvedIntent};
