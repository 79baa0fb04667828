//! Per-code detector definitions (§4.4 step 3).
//!
//! Four factor codes — the three `DURATION_*` codes, `PATTERN_RECURRING`,
//! and the two `SAFETY_*` codes — are driven by dedicated algorithms
//! (a duration-expression parser and a self-harm/red-flag phrase
//! scan respectively) rather than a single keyword/phrase table, and
//! are not represented here; the extractor implements those directly.

use crate::enums::FactorCode;

/// Confidence awarded by a keyword detector on a whole-word match.
pub const KEYWORD_CONFIDENCE: f64 = 0.7;

/// A single code's detection rule.
#[derive(Debug, Clone, Copy)]
pub enum DetectorSpec {
    /// Fires at `KEYWORD_CONFIDENCE` on any whole-word match.
    Keyword(&'static [&'static str]),
    /// Fires at the given confidence on any substring match.
    Phrase(&'static [&'static str], f64),
    /// Tries the phrase list first (at the given confidence), then
    /// falls back to the keyword list (at `KEYWORD_CONFIDENCE`).
    Either {
        phrases: &'static [&'static str],
        phrase_confidence: f64,
        keywords: &'static [&'static str],
    },
}

/// The detector for `code`, or `None` if `code` is handled by a
/// dedicated algorithm (duration or safety) instead.
#[must_use]
pub const fn detector_for(code: FactorCode) -> Option<DetectorSpec> {
    match code {
        FactorCode::SymptomHeadache => {
            Some(DetectorSpec::Keyword(&["headache", "headaches"]))
        }
        FactorCode::SymptomPain => Some(DetectorSpec::Either {
            phrases: &["sharp pain", "dull ache", "back pain"],
            phrase_confidence: 0.85,
            keywords: &["pain", "ache", "aches", "aching", "sore"],
        }),
        FactorCode::SymptomNausea => Some(DetectorSpec::Keyword(&["nausea", "nauseous"])),
        FactorCode::SymptomBreathlessness => {
            Some(DetectorSpec::Keyword(&["breathless", "breathlessness"]))
        }
        FactorCode::SymptomDizziness => Some(DetectorSpec::Keyword(&["dizzy", "dizziness"])),

        FactorCode::MedicalChronicCondition => Some(DetectorSpec::Phrase(
            &["existing condition", "chronic condition"],
            0.8,
        )),
        FactorCode::MedicalRecentDiagnosis => {
            Some(DetectorSpec::Phrase(&["recently diagnosed", "recent diagnosis"], 0.8))
        }
        FactorCode::MedicalMedicationConcern => Some(DetectorSpec::Either {
            phrases: &["side effect", "side effects", "stopped taking"],
            phrase_confidence: 0.8,
            keywords: &["medication", "medicine", "prescription"],
        }),

        FactorCode::EmotionAnxietyStress => Some(DetectorSpec::Either {
            phrases: &["anxious all the time"],
            phrase_confidence: 0.85,
            keywords: &["anxious", "anxiety", "stressed", "stress", "worried", "worry"],
        }),
        FactorCode::EmotionPanic => {
            Some(DetectorSpec::Phrase(&["panic attack", "panicking"], 0.85))
        }
        FactorCode::EmotionLowMood => {
            Some(DetectorSpec::Either {
                phrases: &["low mood"],
                phrase_confidence: 0.85,
                keywords: &["depressed", "sad"],
            })
        }

        FactorCode::CapacityFatigue => Some(DetectorSpec::Either {
            phrases: &["no energy", "cant barely get out of bed"],
            phrase_confidence: 0.8,
            keywords: &["tired", "exhausted", "fatigue", "fatigued"],
        }),
        FactorCode::CapacityPoorSleep => Some(DetectorSpec::Either {
            phrases: &["trouble sleeping"],
            phrase_confidence: 0.8,
            keywords: &["insomnia"],
        }),
        FactorCode::CapacityLowFocus => {
            Some(DetectorSpec::Keyword(&["focus", "concentrate", "concentration"]))
        }

        FactorCode::AccessCostBarrier => Some(DetectorSpec::Either {
            phrases: &["cant afford", "can't afford"],
            phrase_confidence: 0.8,
            keywords: &["afford", "cost", "expensive"],
        }),
        FactorCode::AccessAppointmentBarrier => Some(DetectorSpec::Either {
            phrases: &["cant get an appointment", "can't get an appointment", "long waitlist"],
            phrase_confidence: 0.8,
            keywords: &["waitlist", "booking"],
        }),

        FactorCode::EnvAirQualityExposure => Some(DetectorSpec::Either {
            phrases: &["poor air quality"],
            phrase_confidence: 0.8,
            keywords: &["smoke", "pollution", "mould", "mold", "dust"],
        }),

        FactorCode::SocialSupportLimited => Some(DetectorSpec::Either {
            phrases: &["no one to talk to", "nobody to help", "feel alone"],
            phrase_confidence: 0.8,
            keywords: &["lonely", "isolated", "unsupported"],
        }),

        FactorCode::ResourceFinancialStrain => Some(DetectorSpec::Either {
            phrases: &["cant afford", "can't afford"],
            phrase_confidence: 0.75,
            keywords: &["money", "financial", "rent", "bills"],
        }),
        FactorCode::ResourceTimePressure => Some(DetectorSpec::Either {
            phrases: &["no time"],
            phrase_confidence: 0.8,
            keywords: &["busy"],
        }),
        FactorCode::ResourceCaregivingLoad => Some(DetectorSpec::Either {
            phrases: &["looking after"],
            phrase_confidence: 0.8,
            keywords: &["caregiving", "caring"],
        }),

        FactorCode::KnowledgeNeedsInformation => Some(DetectorSpec::Either {
            phrases: &["not sure what this means", "dont understand"],
            phrase_confidence: 0.75,
            keywords: &["confused", "unsure", "unclear"],
        }),

        FactorCode::GoalSymptomRelief => {
            Some(DetectorSpec::Phrase(&["just want relief", "want to feel better"], 0.75))
        }
        FactorCode::GoalInformationSeeking => {
            Some(DetectorSpec::Keyword(&["understand", "explain", "information"]))
        }
        FactorCode::GoalReassurance => {
            Some(DetectorSpec::Keyword(&["reassurance", "reassured"]))
        }

        FactorCode::DurationOnsetRecent
        | FactorCode::DurationDaysWeeks
        | FactorCode::DurationMonthsPlus
        | FactorCode::PatternRecurring
        | FactorCode::SafetyRedFlag
        | FactorCode::SafetySelfHarm => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_and_safety_codes_have_no_table_detector() {
        assert!(detector_for(FactorCode::DurationOnsetRecent).is_none());
        assert!(detector_for(FactorCode::PatternRecurring).is_none());
        assert!(detector_for(FactorCode::SafetyRedFlag).is_none());
        assert!(detector_for(FactorCode::SafetySelfHarm).is_none());
    }

    #[test]
    fn every_other_code_has_a_detector() {
        for code in FactorCode::all() {
            let is_special = matches!(
                code,
                FactorCode::DurationOnsetRecent
                    | FactorCode::DurationDaysWeeks
                    | FactorCode::DurationMonthsPlus
                    | FactorCode::PatternRecurring
                    | FactorCode::SafetyRedFlag
                    | FactorCode::SafetySelfHarm
            );
            if !is_special {
                assert!(detector_for(code).is_some(), "{code} is missing a detector");
            }
        }
    }
}
