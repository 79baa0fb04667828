//! Per-domain keyword/phrase tables used by the classifier (§4.3) and
//! the safety-override / contextual-gating checks in the extractor
//! (§4.4). Kept as static data and built once, per the design note in
//! §9 ("avoid per-turn recompilation").

use crate::enums::ComplexityDomain;

/// Whole-word keywords scored for `domain`. Empty for `SAFETY_RISK`
/// and `UNKNOWN_OTHER`, which are not scoring domains.
#[must_use]
pub const fn keywords(domain: ComplexityDomain) -> &'static [&'static str] {
    match domain {
        ComplexityDomain::SymptomsBodySignals => &[
            "pain", "ache", "aches", "aching", "fever", "nausea", "nauseous", "headache",
            "dizzy", "dizziness", "breathless", "breathlessness", "vomiting", "cramp", "sore",
        ],
        ComplexityDomain::DurationPattern => {
            &["days", "weeks", "months", "years", "recurring", "ongoing", "chronic", "since"]
        }
        ComplexityDomain::MedicalContext => &[
            "diagnosis", "diagnosed", "condition", "medication", "medicine", "prescription",
            "doctor", "specialist", "chronic", "illness",
        ],
        ComplexityDomain::MentalEmotionalState => &[
            "anxious", "anxiety", "stressed", "stress", "panic", "panicking", "overwhelmed",
            "sad", "depressed", "low", "mood", "worried", "worry",
        ],
        ComplexityDomain::CapacityEnergy => &[
            "tired", "exhausted", "fatigue", "fatigued", "sleep", "sleeping", "insomnia",
            "focus", "concentrate", "concentration", "energy",
        ],
        ComplexityDomain::AccessToCare => &[
            "appointment", "booking", "waitlist", "referral", "afford", "cost", "expensive",
            "gp", "clinic",
        ],
        ComplexityDomain::EnvironmentExposures => {
            &["smoke", "pollution", "mould", "mold", "dust", "air", "humidity", "allergen"]
        }
        ComplexityDomain::SocialSupportContext => &[
            "alone", "lonely", "isolated", "unsupported", "family", "friends", "partner",
            "carer",
        ],
        ComplexityDomain::ResourcesConstraints => &[
            "afford", "money", "financial", "rent", "bills", "time", "busy", "caring",
            "caregiving",
        ],
        ComplexityDomain::KnowledgeBeliefsPreferences => &[
            "confused", "unsure", "understand", "explain", "information", "believe", "unclear",
        ],
        ComplexityDomain::GoalsIntent => {
            &["want", "hope", "goal", "relief", "reassurance", "reassured", "know"]
        }
        ComplexityDomain::SafetyRisk | ComplexityDomain::UnknownOther => &[],
    }
}

/// Substring phrases scored (at double weight) for `domain`.
#[must_use]
pub const fn phrases(domain: ComplexityDomain) -> &'static [&'static str] {
    match domain {
        ComplexityDomain::SymptomsBodySignals => {
            &["trouble sleeping because of pain", "sharp pain", "dull ache"]
        }
        ComplexityDomain::DurationPattern => &[
            "for weeks",
            "for months",
            "for days",
            "every afternoon",
            "every morning",
            "every night",
            "on and off",
            "comes and goes",
        ],
        ComplexityDomain::MedicalContext => {
            &["recently diagnosed", "existing condition", "on medication"]
        }
        ComplexityDomain::MentalEmotionalState => {
            &["panic attack", "low mood", "anxious all the time"]
        }
        ComplexityDomain::CapacityEnergy => {
            &["no energy", "can barely get out of bed", "trouble sleeping"]
        }
        ComplexityDomain::AccessToCare => {
            &["can't get an appointment", "cant get an appointment", "long waitlist"]
        }
        ComplexityDomain::EnvironmentExposures => &["poor air quality", "mould in the house"],
        ComplexityDomain::SocialSupportContext => {
            &["no one to talk to", "nobody to help", "feel alone"]
        }
        ComplexityDomain::ResourcesConstraints => {
            &["cant afford", "can't afford", "no time", "looking after"]
        }
        ComplexityDomain::KnowledgeBeliefsPreferences => {
            &["not sure what this means", "dont understand"]
        }
        ComplexityDomain::GoalsIntent => &["just want relief", "want to feel better"],
        ComplexityDomain::SafetyRisk | ComplexityDomain::UnknownOther => &[],
    }
}

/// Phrases that force an immediate `SAFETY_RISK` override (§4.3 step 2).
pub const SAFETY_RISK_PHRASES: &[&str] = &[
    "chest pain",
    "trouble breathing",
    "cant breathe",
    "can't breathe",
    "thoughts of suicide",
    "want to die",
    "end my life",
    "hurt myself",
];

/// Whole-word keywords that force an immediate `SAFETY_RISK` override.
pub const SAFETY_RISK_KEYWORDS: &[&str] = &["suicidal", "overdose", "seizure", "unresponsive"];

/// Whole-word keywords that, specifically, mark self-harm intent
/// (used by the extractor's safety detector, §4.4 step 3).
pub const SELF_HARM_KEYWORDS: &[&str] = &["suicidal"];

/// Phrases that mark self-harm intent.
pub const SELF_HARM_PHRASES: &[&str] =
    &["thoughts of suicide", "want to die", "end my life", "hurt myself"];

/// Care-related keywords required alongside a cost/afford signal for
/// `ACCESS_COST_BARRIER` to fire (§4.4 step 5 contextual gating).
pub const CARE_KEYWORDS: &[&str] = &["gp", "doctor", "clinic", "specialist", "appointment"];

/// Markers of stated ambiguity, used by the "clarify" `MissingInfo`
/// rule (§4.4 step 6).
pub const AMBIGUITY_MARKERS: &[&str] = &["not sure", "hard to explain", "no idea", "not certain"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_domains_all_have_nonempty_keyword_tables() {
        for domain in ComplexityDomain::scoring_domains() {
            assert!(!keywords(domain).is_empty(), "{domain} has no keywords");
        }
    }

    #[test]
    fn safety_and_unknown_have_no_scoring_tables() {
        assert!(keywords(ComplexityDomain::SafetyRisk).is_empty());
        assert!(keywords(ComplexityDomain::UnknownOther).is_empty());
        assert!(phrases(ComplexityDomain::SafetyRisk).is_empty());
        assert!(phrases(ComplexityDomain::UnknownOther).is_empty());
    }

    #[test]
    fn safety_phrase_table_includes_chest_pain() {
        assert!(SAFETY_RISK_PHRASES.contains(&"chest pain"));
        assert!(SAFETY_RISK_PHRASES.contains(&"trouble breathing"));
    }

    #[test]
    fn safety_keyword_table_includes_suicidal_and_overdose() {
        assert!(SAFETY_RISK_KEYWORDS.contains(&"suicidal"));
        assert!(SAFETY_RISK_KEYWORDS.contains(&"overdose"));
        assert!(SAFETY_RISK_KEYWORDS.contains(&"seizure"));
    }
}
