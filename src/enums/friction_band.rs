//! The three-value friction ordinal computed in §4.6 step 3.

use serde::{Deserialize, Serialize};

/// Friction band: how much practical difficulty stands between the
/// person and acting on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FrictionBand {
    /// No significant access/capacity barrier detected.
    Low,
    /// Some barrier detected (financial strain, low focus, limited support).
    Medium,
    /// Strong barrier detected (cost, appointment access, time, caregiving, fatigue, sleep).
    High,
}

impl FrictionBand {
    /// Stable identifier used in persistence and debug output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            FrictionBand::Low => "low",
            FrictionBand::Medium => "medium",
            FrictionBand::High => "high",
        }
    }
}

impl std::fmt::Display for FrictionBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_low_to_high() {
        assert!(FrictionBand::Low < FrictionBand::Medium);
        assert!(FrictionBand::Medium < FrictionBand::High);
    }
}
