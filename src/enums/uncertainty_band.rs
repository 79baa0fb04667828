//! The three-value uncertainty ordinal computed in §4.6 step 2.

use serde::{Deserialize, Serialize};

/// Uncertainty band: how confident the engine is in what it extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UncertaintyBand {
    /// Factors extracted with high average confidence, no missing info.
    Low,
    /// No factors extracted, or moderate confidence.
    Medium,
    /// A `MissingInfo` prompt is pending.
    High,
}

impl UncertaintyBand {
    /// Stable identifier used in persistence and debug output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            UncertaintyBand::Low => "low",
            UncertaintyBand::Medium => "medium",
            UncertaintyBand::High => "high",
        }
    }
}

impl std::fmt::Display for UncertaintyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_low_to_high() {
        assert!(UncertaintyBand::Low < UncertaintyBand::Medium);
        assert!(UncertaintyBand::Medium < UncertaintyBand::High);
    }
}
