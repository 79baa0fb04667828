//! Priority of a pending `MissingInfo` prompt.

use serde::{Deserialize, Serialize};

/// Priority of a `MissingInfo` candidate. When more than one is produced
/// in a turn, the highest priority wins (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MissingInfoPriority {
    /// Lowest priority.
    Low,
    /// Middle priority.
    Medium,
    /// Highest priority.
    High,
}

impl MissingInfoPriority {
    /// Stable identifier used in persistence and debug output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            MissingInfoPriority::Low => "low",
            MissingInfoPriority::Medium => "medium",
            MissingInfoPriority::High => "high",
        }
    }
}

impl std::fmt::Display for MissingInfoPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
