//! Domain override behavior.
//!
//! Only `SAFETY_RISK` overrides all other domain scoring; every other
//! domain participates in ordinary scoring.

use serde::{Deserialize, Serialize};

/// Whether a domain overrides all other domain scoring when detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverrideBehavior {
    /// This domain, when triggered, forces itself as primary regardless
    /// of scorer output (used only by `SAFETY_RISK`).
    OverridesAll,
    /// No override: this domain is scored normally.
    None,
}

impl OverrideBehavior {
    /// Returns true if this behavior overrides all other scoring.
    #[must_use]
    pub const fn overrides_all(&self) -> bool {
        matches!(self, OverrideBehavior::OverridesAll)
    }
}
