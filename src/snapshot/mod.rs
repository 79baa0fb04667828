//! State Snapshot Builder (C6, §4.6): derives risk/friction/uncertainty
//! bands, the "what matters" bullets, and the next action kind for a
//! turn.

mod bands;
mod builder;
mod what_matters;

pub use builder::{build_snapshot, SAFETY_ESCALATION_COPY};
