//! The four-value risk ordinal computed in §4.6 step 1.

use serde::{Deserialize, Serialize};

/// Risk band: how urgently the current turn needs attention.
///
/// Ordered `Low < Medium < High < Urgent`; `Urgent` always forces
/// safety-escalation routing (§4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskBand {
    /// No elevated risk signal.
    Low,
    /// Some elevated symptom/emotion signal.
    Medium,
    /// Strong elevated signal (e.g. breathlessness, dizziness).
    High,
    /// Safety-critical: forces `safety_escalation` and `urgent_care_ed`/`crisis_support`.
    Urgent,
}

impl RiskBand {
    /// Stable identifier used in persistence and debug output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
            RiskBand::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_low_to_urgent() {
        assert!(RiskBand::Low < RiskBand::Medium);
        assert!(RiskBand::Medium < RiskBand::High);
        assert!(RiskBand::High < RiskBand::Urgent);
    }
}
