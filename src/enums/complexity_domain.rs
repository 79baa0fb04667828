//! The 13 coarse categories of concern the engine reasons about.
//!
//! Domains gate which factors a turn is allowed to surface (§4.4) and
//! order the "what matters" bullets (§4.6). Each domain carries a fixed
//! `priority` (1 = safety, 13 = unknown) and an `override_behavior`;
//! only `SAFETY_RISK` overrides all other domain scoring.

use super::OverrideBehavior;
use serde::{Deserialize, Serialize};

/// One of the 13 coarse categories of concern.
///
/// # Examples
///
/// ```
/// use complexity_engine::enums::ComplexityDomain;
///
/// assert_eq!(ComplexityDomain::SafetyRisk.priority(), 1);
/// assert!(ComplexityDomain::SafetyRisk.override_behavior().overrides_all());
/// assert!(!ComplexityDomain::SymptomsBodySignals.override_behavior().overrides_all());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityDomain {
    /// Physical symptoms and body signals.
    SymptomsBodySignals,
    /// How long something has been going on, and its pattern.
    DurationPattern,
    /// Existing medical conditions, diagnoses, medications.
    MedicalContext,
    /// Emotional and mental state.
    MentalEmotionalState,
    /// Energy, fatigue, and capacity to act.
    CapacityEnergy,
    /// Ability to reach or afford care.
    AccessToCare,
    /// Safety-critical risk signals. Overrides all other domains.
    SafetyRisk,
    /// Environmental exposures (air quality, heat, etc.).
    EnvironmentExposures,
    /// Social support network and isolation.
    SocialSupportContext,
    /// Financial, time, and caregiving constraints.
    ResourcesConstraints,
    /// Knowledge gaps, beliefs, and preferences.
    KnowledgeBeliefsPreferences,
    /// Goals and intent behind the input.
    GoalsIntent,
    /// Fallback when no domain signal is detected.
    UnknownOther,
}

impl ComplexityDomain {
    /// All 13 domains, in priority order (safety first, unknown last).
    #[must_use]
    pub const fn all() -> [ComplexityDomain; 13] {
        [
            ComplexityDomain::SafetyRisk,
            ComplexityDomain::SymptomsBodySignals,
            ComplexityDomain::ResourcesConstraints,
            ComplexityDomain::AccessToCare,
            ComplexityDomain::CapacityEnergy,
            ComplexityDomain::MentalEmotionalState,
            ComplexityDomain::DurationPattern,
            ComplexityDomain::MedicalContext,
            ComplexityDomain::EnvironmentExposures,
            ComplexityDomain::SocialSupportContext,
            ComplexityDomain::KnowledgeBeliefsPreferences,
            ComplexityDomain::GoalsIntent,
            ComplexityDomain::UnknownOther,
        ]
    }

    /// Domains eligible for §4.3 scoring (all except `SafetyRisk`, which is
    /// handled by the override check, and `UnknownOther`, which is a
    /// fallback rather than a scored domain).
    #[must_use]
    pub fn scoring_domains() -> Vec<ComplexityDomain> {
        ComplexityDomain::all()
            .into_iter()
            .filter(|d| !matches!(d, ComplexityDomain::SafetyRisk | ComplexityDomain::UnknownOther))
            .collect()
    }

    /// Fixed priority: 1 = safety (highest), 13 = unknown (lowest).
    ///
    /// Used as a tie-breaker when two domains score equal confidence.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            ComplexityDomain::SafetyRisk => 1,
            ComplexityDomain::SymptomsBodySignals => 2,
            ComplexityDomain::ResourcesConstraints => 3,
            ComplexityDomain::AccessToCare => 4,
            ComplexityDomain::CapacityEnergy => 5,
            ComplexityDomain::MentalEmotionalState => 6,
            ComplexityDomain::DurationPattern => 7,
            ComplexityDomain::MedicalContext => 8,
            ComplexityDomain::EnvironmentExposures => 9,
            ComplexityDomain::SocialSupportContext => 10,
            ComplexityDomain::KnowledgeBeliefsPreferences => 11,
            ComplexityDomain::GoalsIntent => 12,
            ComplexityDomain::UnknownOther => 13,
        }
    }

    /// Override behavior: only `SafetyRisk` overrides all other scoring.
    #[must_use]
    pub const fn override_behavior(&self) -> OverrideBehavior {
        match self {
            ComplexityDomain::SafetyRisk => OverrideBehavior::OverridesAll,
            _ => OverrideBehavior::None,
        }
    }

    /// Stable snake_case identifier, used in persistence and debug output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            ComplexityDomain::SymptomsBodySignals => "SYMPTOMS_BODY_SIGNALS",
            ComplexityDomain::DurationPattern => "DURATION_PATTERN",
            ComplexityDomain::MedicalContext => "MEDICAL_CONTEXT",
            ComplexityDomain::MentalEmotionalState => "MENTAL_EMOTIONAL_STATE",
            ComplexityDomain::CapacityEnergy => "CAPACITY_ENERGY",
            ComplexityDomain::AccessToCare => "ACCESS_TO_CARE",
            ComplexityDomain::SafetyRisk => "SAFETY_RISK",
            ComplexityDomain::EnvironmentExposures => "ENVIRONMENT_EXPOSURES",
            ComplexityDomain::SocialSupportContext => "SOCIAL_SUPPORT_CONTEXT",
            ComplexityDomain::ResourcesConstraints => "RESOURCES_CONSTRAINTS",
            ComplexityDomain::KnowledgeBeliefsPreferences => "KNOWLEDGE_BELIEFS_PREFERENCES",
            ComplexityDomain::GoalsIntent => "GOALS_INTENT",
            ComplexityDomain::UnknownOther => "UNKNOWN_OTHER",
        }
    }
}

impl std::fmt::Display for ComplexityDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safety_risk_has_highest_priority_and_overrides() {
        assert_eq!(ComplexityDomain::SafetyRisk.priority(), 1);
        assert!(ComplexityDomain::SafetyRisk.override_behavior().overrides_all());
    }

    #[test]
    fn unknown_other_has_lowest_priority() {
        assert_eq!(ComplexityDomain::UnknownOther.priority(), 13);
    }

    #[test]
    fn scoring_domains_excludes_safety_and_unknown() {
        let scoring = ComplexityDomain::scoring_domains();
        assert_eq!(scoring.len(), 11);
        assert!(!scoring.contains(&ComplexityDomain::SafetyRisk));
        assert!(!scoring.contains(&ComplexityDomain::UnknownOther));
    }

    #[test]
    fn all_returns_thirteen_domains() {
        assert_eq!(ComplexityDomain::all().len(), 13);
    }

    #[test]
    fn only_safety_risk_overrides() {
        for domain in ComplexityDomain::all() {
            if domain == ComplexityDomain::SafetyRisk {
                assert!(domain.override_behavior().overrides_all());
            } else {
                assert!(!domain.override_behavior().overrides_all());
            }
        }
    }

    #[test]
    fn codes_are_stable_strings() {
        assert_eq!(ComplexityDomain::SafetyRisk.code(), "SAFETY_RISK");
        assert_eq!(
            ComplexityDomain::SymptomsBodySignals.code(),
            "SYMPTOMS_BODY_SIGNALS"
        );
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(format!("{}", ComplexityDomain::GoalsIntent), "GOALS_INTENT");
    }
}
