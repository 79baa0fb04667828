//! The 31 closed factor codes and their fixed taxonomy (§3, §4.1).
//!
//! Each code has a fixed `domain`, `factor_type`, `default_time_horizon`,
//! and `modifiability`. These are immutable facts about the code, not
//! something a detector can change (a detector may still override the
//! *instance*'s `time_horizon`, e.g. the duration detector, per §4.4).

use super::{ComplexityDomain, FactorModifiability, FactorTimeHorizon, FactorType};
use serde::{Deserialize, Serialize};

/// One of the 31 closed factor codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorCode {
    SymptomHeadache,
    SymptomPain,
    SymptomNausea,
    SymptomBreathlessness,
    SymptomDizziness,
    DurationOnsetRecent,
    DurationDaysWeeks,
    DurationMonthsPlus,
    PatternRecurring,
    MedicalChronicCondition,
    MedicalRecentDiagnosis,
    MedicalMedicationConcern,
    EmotionAnxietyStress,
    EmotionPanic,
    EmotionLowMood,
    CapacityFatigue,
    CapacityPoorSleep,
    CapacityLowFocus,
    AccessCostBarrier,
    AccessAppointmentBarrier,
    SafetyRedFlag,
    SafetySelfHarm,
    EnvAirQualityExposure,
    SocialSupportLimited,
    ResourceFinancialStrain,
    ResourceTimePressure,
    ResourceCaregivingLoad,
    KnowledgeNeedsInformation,
    GoalSymptomRelief,
    GoalInformationSeeking,
    GoalReassurance,
}

impl FactorCode {
    /// All 31 factor codes.
    #[must_use]
    pub const fn all() -> [FactorCode; 31] {
        [
            FactorCode::SymptomHeadache,
            FactorCode::SymptomPain,
            FactorCode::SymptomNausea,
            FactorCode::SymptomBreathlessness,
            FactorCode::SymptomDizziness,
            FactorCode::DurationOnsetRecent,
            FactorCode::DurationDaysWeeks,
            FactorCode::DurationMonthsPlus,
            FactorCode::PatternRecurring,
            FactorCode::MedicalChronicCondition,
            FactorCode::MedicalRecentDiagnosis,
            FactorCode::MedicalMedicationConcern,
            FactorCode::EmotionAnxietyStress,
            FactorCode::EmotionPanic,
            FactorCode::EmotionLowMood,
            FactorCode::CapacityFatigue,
            FactorCode::CapacityPoorSleep,
            FactorCode::CapacityLowFocus,
            FactorCode::AccessCostBarrier,
            FactorCode::AccessAppointmentBarrier,
            FactorCode::SafetyRedFlag,
            FactorCode::SafetySelfHarm,
            FactorCode::EnvAirQualityExposure,
            FactorCode::SocialSupportLimited,
            FactorCode::ResourceFinancialStrain,
            FactorCode::ResourceTimePressure,
            FactorCode::ResourceCaregivingLoad,
            FactorCode::KnowledgeNeedsInformation,
            FactorCode::GoalSymptomRelief,
            FactorCode::GoalInformationSeeking,
            FactorCode::GoalReassurance,
        ]
    }

    /// Stable SCREAMING_SNAKE_CASE identifier, used in persistence.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            FactorCode::SymptomHeadache => "SYMPTOM_HEADACHE",
            FactorCode::SymptomPain => "SYMPTOM_PAIN",
            FactorCode::SymptomNausea => "SYMPTOM_NAUSEA",
            FactorCode::SymptomBreathlessness => "SYMPTOM_BREATHLESSNESS",
            FactorCode::SymptomDizziness => "SYMPTOM_DIZZINESS",
            FactorCode::DurationOnsetRecent => "DURATION_ONSET_RECENT",
            FactorCode::DurationDaysWeeks => "DURATION_DAYS_WEEKS",
            FactorCode::DurationMonthsPlus => "DURATION_MONTHS_PLUS",
            FactorCode::PatternRecurring => "PATTERN_RECURRING",
            FactorCode::MedicalChronicCondition => "MEDICAL_CHRONIC_CONDITION",
            FactorCode::MedicalRecentDiagnosis => "MEDICAL_RECENT_DIAGNOSIS",
            FactorCode::MedicalMedicationConcern => "MEDICAL_MEDICATION_CONCERN",
            FactorCode::EmotionAnxietyStress => "EMOTION_ANXIETY_STRESS",
            FactorCode::EmotionPanic => "EMOTION_PANIC",
            FactorCode::EmotionLowMood => "EMOTION_LOW_MOOD",
            FactorCode::CapacityFatigue => "CAPACITY_FATIGUE",
            FactorCode::CapacityPoorSleep => "CAPACITY_POOR_SLEEP",
            FactorCode::CapacityLowFocus => "CAPACITY_LOW_FOCUS",
            FactorCode::AccessCostBarrier => "ACCESS_COST_BARRIER",
            FactorCode::AccessAppointmentBarrier => "ACCESS_APPOINTMENT_BARRIER",
            FactorCode::SafetyRedFlag => "SAFETY_RED_FLAG",
            FactorCode::SafetySelfHarm => "SAFETY_SELF_HARM",
            FactorCode::EnvAirQualityExposure => "ENV_AIR_QUALITY_EXPOSURE",
            FactorCode::SocialSupportLimited => "SOCIAL_SUPPORT_LIMITED",
            FactorCode::ResourceFinancialStrain => "RESOURCE_FINANCIAL_STRAIN",
            FactorCode::ResourceTimePressure => "RESOURCE_TIME_PRESSURE",
            FactorCode::ResourceCaregivingLoad => "RESOURCE_CAREGIVING_LOAD",
            FactorCode::KnowledgeNeedsInformation => "KNOWLEDGE_NEEDS_INFORMATION",
            FactorCode::GoalSymptomRelief => "GOAL_SYMPTOM_RELIEF",
            FactorCode::GoalInformationSeeking => "GOAL_INFORMATION_SEEKING",
            FactorCode::GoalReassurance => "GOAL_REASSURANCE",
        }
    }

    /// Parses the stable identifier back into a `FactorCode`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        FactorCode::all().into_iter().find(|c| c.code() == code)
    }

    /// The fixed domain this code belongs to. A detection is only kept
    /// if this domain is in the turn's allowed-domain set (§4.4 step 4).
    #[must_use]
    pub const fn domain(&self) -> ComplexityDomain {
        match self {
            FactorCode::SymptomHeadache
            | FactorCode::SymptomPain
            | FactorCode::SymptomNausea
            | FactorCode::SymptomBreathlessness
            | FactorCode::SymptomDizziness => ComplexityDomain::SymptomsBodySignals,

            FactorCode::DurationOnsetRecent
            | FactorCode::DurationDaysWeeks
            | FactorCode::DurationMonthsPlus
            | FactorCode::PatternRecurring => ComplexityDomain::DurationPattern,

            FactorCode::MedicalChronicCondition
            | FactorCode::MedicalRecentDiagnosis
            | FactorCode::MedicalMedicationConcern => ComplexityDomain::MedicalContext,

            FactorCode::EmotionAnxietyStress
            | FactorCode::EmotionPanic
            | FactorCode::EmotionLowMood => ComplexityDomain::MentalEmotionalState,

            FactorCode::CapacityFatigue
            | FactorCode::CapacityPoorSleep
            | FactorCode::CapacityLowFocus => ComplexityDomain::CapacityEnergy,

            FactorCode::AccessCostBarrier | FactorCode::AccessAppointmentBarrier => {
                ComplexityDomain::AccessToCare
            }

            FactorCode::SafetyRedFlag | FactorCode::SafetySelfHarm => ComplexityDomain::SafetyRisk,

            FactorCode::EnvAirQualityExposure => ComplexityDomain::EnvironmentExposures,

            FactorCode::SocialSupportLimited => ComplexityDomain::SocialSupportContext,

            FactorCode::ResourceFinancialStrain
            | FactorCode::ResourceTimePressure
            | FactorCode::ResourceCaregivingLoad => ComplexityDomain::ResourcesConstraints,

            FactorCode::KnowledgeNeedsInformation => ComplexityDomain::KnowledgeBeliefsPreferences,

            FactorCode::GoalSymptomRelief
            | FactorCode::GoalInformationSeeking
            | FactorCode::GoalReassurance => ComplexityDomain::GoalsIntent,
        }
    }

    /// The fixed factor type for this code.
    #[must_use]
    pub const fn factor_type(&self) -> FactorType {
        match self {
            FactorCode::AccessCostBarrier
            | FactorCode::AccessAppointmentBarrier
            | FactorCode::ResourceFinancialStrain
            | FactorCode::ResourceTimePressure
            | FactorCode::ResourceCaregivingLoad => FactorType::ConstrainedChoice,

            FactorCode::KnowledgeNeedsInformation
            | FactorCode::GoalSymptomRelief
            | FactorCode::GoalInformationSeeking
            | FactorCode::GoalReassurance => FactorType::Choice,

            _ => FactorType::Chance,
        }
    }

    /// The fixed default time horizon for this code, used when a
    /// detector does not override it (the duration detector does, per
    /// §4.4 step 3).
    #[must_use]
    pub const fn default_time_horizon(&self) -> FactorTimeHorizon {
        match self {
            FactorCode::DurationOnsetRecent | FactorCode::DurationDaysWeeks => {
                FactorTimeHorizon::Acute
            }
            FactorCode::DurationMonthsPlus | FactorCode::PatternRecurring => {
                FactorTimeHorizon::Chronic
            }

            FactorCode::SymptomHeadache
            | FactorCode::SymptomPain
            | FactorCode::SymptomNausea
            | FactorCode::SymptomBreathlessness
            | FactorCode::SymptomDizziness
            | FactorCode::SafetyRedFlag
            | FactorCode::SafetySelfHarm
            | FactorCode::MedicalRecentDiagnosis => FactorTimeHorizon::Acute,

            FactorCode::MedicalChronicCondition
            | FactorCode::SocialSupportLimited
            | FactorCode::ResourceFinancialStrain
            | FactorCode::ResourceCaregivingLoad => FactorTimeHorizon::Chronic,

            _ => FactorTimeHorizon::Unknown,
        }
    }

    /// The fixed default modifiability for this code.
    #[must_use]
    pub const fn modifiability(&self) -> FactorModifiability {
        match self {
            FactorCode::AccessCostBarrier
            | FactorCode::AccessAppointmentBarrier
            | FactorCode::ResourceFinancialStrain
            | FactorCode::ResourceTimePressure
            | FactorCode::ResourceCaregivingLoad
            | FactorCode::KnowledgeNeedsInformation
            | FactorCode::GoalSymptomRelief
            | FactorCode::GoalInformationSeeking
            | FactorCode::GoalReassurance => FactorModifiability::High,

            FactorCode::EmotionAnxietyStress
            | FactorCode::EmotionPanic
            | FactorCode::EmotionLowMood
            | FactorCode::CapacityFatigue
            | FactorCode::CapacityPoorSleep
            | FactorCode::CapacityLowFocus
            | FactorCode::SocialSupportLimited => FactorModifiability::Medium,

            FactorCode::MedicalMedicationConcern => FactorModifiability::Unknown,

            _ => FactorModifiability::Low,
        }
    }
}

impl std::fmt::Display for FactorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_thirty_one_codes() {
        assert_eq!(FactorCode::all().len(), 31);
    }

    #[test]
    fn all_codes_round_trip() {
        for code in FactorCode::all() {
            assert_eq!(FactorCode::from_code(code.code()), Some(code));
        }
    }

    #[test]
    fn safety_codes_belong_to_safety_risk_domain() {
        assert_eq!(FactorCode::SafetyRedFlag.domain(), ComplexityDomain::SafetyRisk);
        assert_eq!(FactorCode::SafetySelfHarm.domain(), ComplexityDomain::SafetyRisk);
    }

    #[test]
    fn access_codes_are_constrained_choice() {
        assert_eq!(
            FactorCode::AccessCostBarrier.factor_type(),
            FactorType::ConstrainedChoice
        );
        assert_eq!(
            FactorCode::AccessAppointmentBarrier.factor_type(),
            FactorType::ConstrainedChoice
        );
    }

    #[test]
    fn duration_months_plus_is_chronic() {
        assert_eq!(
            FactorCode::DurationMonthsPlus.default_time_horizon(),
            FactorTimeHorizon::Chronic
        );
    }

    #[test]
    fn all_codes_have_distinct_stable_strings() {
        let mut codes: Vec<&str> = FactorCode::all().iter().map(FactorCode::code).collect();
        let before = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), before);
    }
}
