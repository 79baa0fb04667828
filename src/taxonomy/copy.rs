//! Canonical human-facing copy tables (§4.1).
//!
//! Every string here is part of the wire/UI contract (§6): tests
//! assert literal outputs, and nothing here may be generated at
//! runtime.

use crate::enums::{ComplexityDomain, FactorCode};

/// Human-readable label for a domain, used in debug output and chip
/// grouping.
#[must_use]
pub const fn domain_label(domain: ComplexityDomain) -> &'static str {
    match domain {
        ComplexityDomain::SymptomsBodySignals => "Symptoms & body signals",
        ComplexityDomain::DurationPattern => "Duration & pattern",
        ComplexityDomain::MedicalContext => "Medical context",
        ComplexityDomain::MentalEmotionalState => "Mental & emotional state",
        ComplexityDomain::CapacityEnergy => "Capacity & energy",
        ComplexityDomain::AccessToCare => "Access to care",
        ComplexityDomain::SafetyRisk => "Safety risk",
        ComplexityDomain::EnvironmentExposures => "Environment exposures",
        ComplexityDomain::SocialSupportContext => "Social support context",
        ComplexityDomain::ResourcesConstraints => "Resources & constraints",
        ComplexityDomain::KnowledgeBeliefsPreferences => "Knowledge, beliefs & preferences",
        ComplexityDomain::GoalsIntent => "Goals & intent",
        ComplexityDomain::UnknownOther => "Unknown / other",
    }
}

/// This code's rank in the "what matters" ordering (§4.6 step 4):
/// symptoms > resources > access > capacity > mental > duration >
/// medical > environment > social > knowledge > goals > unknown.
/// Lower rank sorts first. `SAFETY_RISK` is handled upstream via the
/// risk band and never reaches this table through a bullet.
#[must_use]
pub const fn what_matters_domain_rank(domain: ComplexityDomain) -> u8 {
    match domain {
        ComplexityDomain::SymptomsBodySignals => 0,
        ComplexityDomain::ResourcesConstraints => 1,
        ComplexityDomain::AccessToCare => 2,
        ComplexityDomain::CapacityEnergy => 3,
        ComplexityDomain::MentalEmotionalState => 4,
        ComplexityDomain::DurationPattern => 5,
        ComplexityDomain::MedicalContext => 6,
        ComplexityDomain::EnvironmentExposures => 7,
        ComplexityDomain::SocialSupportContext => 8,
        ComplexityDomain::KnowledgeBeliefsPreferences => 9,
        ComplexityDomain::GoalsIntent => 10,
        ComplexityDomain::SafetyRisk => 11,
        ComplexityDomain::UnknownOther => 11,
    }
}

/// Canonical one-line "what matters" bullet for a factor code (§4.1,
/// §4.6 step 4).
#[must_use]
pub const fn bullet_copy(code: FactorCode) -> &'static str {
    match code {
        FactorCode::SymptomHeadache => "You mentioned a headache.",
        FactorCode::SymptomPain => "You mentioned pain.",
        FactorCode::SymptomNausea => "You mentioned nausea.",
        FactorCode::SymptomBreathlessness => "You mentioned breathlessness.",
        FactorCode::SymptomDizziness => "You mentioned dizziness.",
        FactorCode::DurationOnsetRecent => "This started recently.",
        FactorCode::DurationDaysWeeks => "This has been going on for days to weeks.",
        FactorCode::DurationMonthsPlus => "This has been going on for months or longer.",
        FactorCode::PatternRecurring => "This keeps recurring.",
        FactorCode::MedicalChronicCondition => "You have an existing medical condition.",
        FactorCode::MedicalRecentDiagnosis => "You mentioned a recent diagnosis.",
        FactorCode::MedicalMedicationConcern => "You raised a concern about a medication.",
        FactorCode::EmotionAnxietyStress => "You mentioned feeling anxious or stressed.",
        FactorCode::EmotionPanic => "You mentioned a panic episode.",
        FactorCode::EmotionLowMood => "You mentioned feeling low.",
        FactorCode::CapacityFatigue => "You mentioned feeling fatigued.",
        FactorCode::CapacityPoorSleep => "You mentioned poor sleep.",
        FactorCode::CapacityLowFocus => "You mentioned trouble focusing.",
        FactorCode::AccessCostBarrier => "Cost may be a barrier to getting care.",
        FactorCode::AccessAppointmentBarrier => "Getting an appointment may be a barrier.",
        FactorCode::SafetyRedFlag => "You mentioned something that could be urgent.",
        FactorCode::SafetySelfHarm => "You mentioned thoughts of harming yourself.",
        FactorCode::EnvAirQualityExposure => "You mentioned an air quality exposure.",
        FactorCode::SocialSupportLimited => "You mentioned limited support around you.",
        FactorCode::ResourceFinancialStrain => "You mentioned financial strain.",
        FactorCode::ResourceTimePressure => "You mentioned being short on time.",
        FactorCode::ResourceCaregivingLoad => "You mentioned a caregiving load.",
        FactorCode::KnowledgeNeedsInformation => "You're looking for more information.",
        FactorCode::GoalSymptomRelief => "You're hoping for relief from your symptoms.",
        FactorCode::GoalInformationSeeking => "You're hoping to understand this better.",
        FactorCode::GoalReassurance => "You're hoping for reassurance.",
    }
}

/// The fallback bullet used when no factors are available (§4.6 step 4).
pub const NO_FACTORS_BULLET: &str = "It is not clear yet what is most important.";

/// Chip grouping used by the explainability payload (§4.9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipGroup {
    /// Bodily symptoms.
    BodySignals,
    /// Access/resource constraints.
    Constraints,
    /// Everything else.
    Context,
}

impl ChipGroup {
    /// Stable label shown in the UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            ChipGroup::BodySignals => "Body signals",
            ChipGroup::Constraints => "Constraints",
            ChipGroup::Context => "Context",
        }
    }

    /// The confidence boost applied to chips in this group before
    /// sorting (§4.9 step 3).
    #[must_use]
    pub const fn boost(&self) -> f64 {
        match self {
            ChipGroup::BodySignals => 0.20,
            ChipGroup::Constraints => 0.15,
            ChipGroup::Context => 0.00,
        }
    }
}

/// Which chip group `code` belongs to.
#[must_use]
pub const fn chip_group(code: FactorCode) -> ChipGroup {
    match code {
        FactorCode::SymptomHeadache
        | FactorCode::SymptomPain
        | FactorCode::SymptomNausea
        | FactorCode::SymptomBreathlessness
        | FactorCode::SymptomDizziness => ChipGroup::BodySignals,

        FactorCode::AccessCostBarrier
        | FactorCode::AccessAppointmentBarrier
        | FactorCode::ResourceFinancialStrain
        | FactorCode::ResourceTimePressure
        | FactorCode::ResourceCaregivingLoad => ChipGroup::Constraints,

        _ => ChipGroup::Context,
    }
}

/// Short UI chip label for a factor code (§4.1, §4.9).
#[must_use]
pub const fn chip_label(code: FactorCode) -> &'static str {
    match code {
        FactorCode::SymptomHeadache => "Headache",
        FactorCode::SymptomPain => "Pain",
        FactorCode::SymptomNausea => "Nausea",
        FactorCode::SymptomBreathlessness => "Breathlessness",
        FactorCode::SymptomDizziness => "Dizziness",
        FactorCode::DurationOnsetRecent => "Recent onset",
        FactorCode::DurationDaysWeeks => "Days to weeks",
        FactorCode::DurationMonthsPlus => "Months or longer",
        FactorCode::PatternRecurring => "Recurring",
        FactorCode::MedicalChronicCondition => "Existing condition",
        FactorCode::MedicalRecentDiagnosis => "Recent diagnosis",
        FactorCode::MedicalMedicationConcern => "Medication concern",
        FactorCode::EmotionAnxietyStress => "Anxiety / stress",
        FactorCode::EmotionPanic => "Panic",
        FactorCode::EmotionLowMood => "Low mood",
        FactorCode::CapacityFatigue => "Fatigue",
        FactorCode::CapacityPoorSleep => "Poor sleep",
        FactorCode::CapacityLowFocus => "Low focus",
        FactorCode::AccessCostBarrier => "Cost barrier",
        FactorCode::AccessAppointmentBarrier => "Appointment barrier",
        FactorCode::SafetyRedFlag => "Red flag",
        FactorCode::SafetySelfHarm => "Self-harm risk",
        FactorCode::EnvAirQualityExposure => "Air quality exposure",
        FactorCode::SocialSupportLimited => "Limited support",
        FactorCode::ResourceFinancialStrain => "Financial strain",
        FactorCode::ResourceTimePressure => "Time pressure",
        FactorCode::ResourceCaregivingLoad => "Caregiving load",
        FactorCode::KnowledgeNeedsInformation => "Needs information",
        FactorCode::GoalSymptomRelief => "Wants relief",
        FactorCode::GoalInformationSeeking => "Wants information",
        FactorCode::GoalReassurance => "Wants reassurance",
    }
}
