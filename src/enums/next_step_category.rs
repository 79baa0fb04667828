//! The five routable next-step categories (§4.7).

use serde::{Deserialize, Serialize};

/// One of the five next-step categories the router can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NextStepCategory {
    /// Self-directed care; no professional contact recommended yet.
    SelfCare,
    /// Consult a pharmacist.
    Pharmacist,
    /// Book a GP or telehealth appointment.
    GpTelehealth,
    /// Seek urgent care or an emergency department.
    UrgentCareEd,
    /// Contact crisis support services.
    CrisisSupport,
}

impl NextStepCategory {
    /// Stable identifier used in persistence and debug output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            NextStepCategory::SelfCare => "self_care",
            NextStepCategory::Pharmacist => "pharmacist",
            NextStepCategory::GpTelehealth => "gp_telehealth",
            NextStepCategory::UrgentCareEd => "urgent_care_ed",
            NextStepCategory::CrisisSupport => "crisis_support",
        }
    }
}

impl std::fmt::Display for NextStepCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
