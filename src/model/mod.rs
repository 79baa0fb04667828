//! Core entities (§3): events, factors, the aggregated profile, the
//! per-turn snapshot, and the pending follow-up.

mod event;
mod factor;
mod missing_info;
mod pending_follow_up;
mod profile;
mod snapshot;
mod used_factor;

pub use event::Event;
pub use factor::Factor;
pub use missing_info::{MissingInfo, CLARIFY_QUESTION, DURATION_QUESTION};
pub use pending_follow_up::PendingFollowUp;
pub use profile::{ComplexityProfile, DomainCoverage};
pub use snapshot::StateSnapshot;
pub use used_factor::UsedFactor;
