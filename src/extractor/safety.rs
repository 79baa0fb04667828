//! The safety detector (§4.4 step 3, "Safety detector").
//!
//! Runs independently of domain gating: a red-flag or self-harm
//! phrase is surfaced as a factor regardless of which domains the
//! classifier allowed, since §4.4 step 2 always includes `SAFETY_RISK`
//! in the allowed set.

use crate::enums::FactorCode;
use crate::taxonomy;
use crate::types::Value;

/// Confidence assigned to safety-detector hits. Deliberately high:
/// these factors drive the risk band directly (§4.6).
const SAFETY_DETECTOR_CONFIDENCE: f64 = 0.95;

/// One detected safety factor.
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyDetection {
    /// The factor code this detection maps to.
    pub code: FactorCode,
    /// The raw cue the detection matched on.
    pub value: Value,
    /// The confidence to assign the resulting factor.
    pub confidence: f64,
}

/// Runs the safety detector over already-normalized `text`.
#[must_use]
pub fn detect_safety(normalized_text: &str) -> Vec<SafetyDetection> {
    let mut detections = Vec::new();

    if let Some(cue) = first_match(normalized_text, taxonomy::SELF_HARM_PHRASES, taxonomy::SELF_HARM_KEYWORDS) {
        detections.push(SafetyDetection {
            code: FactorCode::SafetySelfHarm,
            value: Value::from(cue),
            confidence: SAFETY_DETECTOR_CONFIDENCE,
        });
    }

    if let Some(cue) = first_match(normalized_text, taxonomy::SAFETY_RISK_PHRASES, taxonomy::SAFETY_RISK_KEYWORDS) {
        detections.push(SafetyDetection {
            code: FactorCode::SafetyRedFlag,
            value: Value::from(cue),
            confidence: SAFETY_DETECTOR_CONFIDENCE,
        });
    }

    detections
}

fn first_match(normalized: &str, phrases: &'static [&'static str], keywords: &'static [&'static str]) -> Option<&'static str> {
    phrases
        .iter()
        .find(|phrase| taxonomy::contains_phrase(normalized, phrase))
        .or_else(|| keywords.iter().find(|kw| taxonomy::contains_whole_word(normalized, kw)))
        .copied()
}
