//! How much a factor can realistically be changed by the person experiencing it.

use serde::{Deserialize, Serialize};

/// How modifiable a factor is, used for downstream prioritization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorModifiability {
    /// Readily addressed (e.g. closing a knowledge gap).
    High,
    /// Addressable with effort or support.
    Medium,
    /// Rarely addressable directly.
    Low,
    /// Not yet determined.
    Unknown,
}

impl FactorModifiability {
    /// Stable identifier used in persistence.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            FactorModifiability::High => "high",
            FactorModifiability::Medium => "medium",
            FactorModifiability::Low => "low",
            FactorModifiability::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FactorModifiability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(FactorModifiability::High.code(), "high");
        assert_eq!(FactorModifiability::Unknown.code(), "unknown");
    }
}
