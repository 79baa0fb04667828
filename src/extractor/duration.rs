//! The duration detector (§4.4 step 3, "Duration detector").
//!
//! Parses numeric duration expressions and recurrence phrase cues out
//! of normalized text, producing zero or more duration/pattern
//! factors.

use std::sync::OnceLock;

use regex::Regex;

use crate::enums::FactorCode;
use crate::types::Value;

/// Confidence for `DURATION_ONSET_RECENT` and `DURATION_DAYS_WEEKS`.
const ACUTE_DURATION_CONFIDENCE: f64 = 0.75;
/// Confidence for `DURATION_MONTHS_PLUS`.
const CHRONIC_DURATION_CONFIDENCE: f64 = 0.8;
/// Confidence for `PATTERN_RECURRING`.
const RECURRING_CONFIDENCE: f64 = 0.7;

const RECURRING_PHRASE_CUES: &[&str] =
    &["recurring", "ongoing", "on and off", "comes and goes", "every afternoon", "every morning", "every night"];

fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(\d+|few|couple)\s+(day|days|week|weeks|month|months|year|years)\b")
            .expect("duration regex is valid")
    })
}

/// One detected duration/pattern factor: its code, the raw matched
/// phrase (used as the factor's value), and its confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationDetection {
    /// The factor code this detection maps to.
    pub code: FactorCode,
    /// The raw text the detection was keyed on.
    pub value: Value,
    /// The confidence to assign the resulting factor.
    pub confidence: f64,
}

/// Runs the duration detector over already-normalized `text`.
#[must_use]
pub fn detect_durations(normalized_text: &str) -> Vec<DurationDetection> {
    let mut detections = Vec::new();
    let mut seen_codes = std::collections::HashSet::new();

    for capture in duration_regex().captures_iter(normalized_text) {
        let matched = capture.get(0).map(|m| m.as_str().to_string()).unwrap_or_default();
        let unit = capture.get(2).map(|m| m.as_str()).unwrap_or_default();

        let code = match unit {
            "day" | "days" => FactorCode::DurationOnsetRecent,
            "week" | "weeks" => FactorCode::DurationDaysWeeks,
            "month" | "months" | "year" | "years" => FactorCode::DurationMonthsPlus,
            _ => continue,
        };

        if seen_codes.insert(code) {
            let confidence = match code {
                FactorCode::DurationMonthsPlus => CHRONIC_DURATION_CONFIDENCE,
                _ => ACUTE_DURATION_CONFIDENCE,
            };
            detections.push(DurationDetection { code, value: Value::from(matched), confidence });
        }
    }

    for cue in RECURRING_PHRASE_CUES {
        if normalized_text.contains(cue) && seen_codes.insert(FactorCode::PatternRecurring) {
            detections.push(DurationDetection {
                code: FactorCode::PatternRecurring,
                value: Value::from(*cue),
                confidence: RECURRING_CONFIDENCE,
            });
            break;
        }
    }

    detections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weeks_maps_to_days_weeks_code() {
        let detections = detect_durations("this has been going on for weeks");
        assert!(detections.iter().any(|d| d.code == FactorCode::DurationDaysWeeks));
    }

    #[test]
    fn months_maps_to_months_plus_code() {
        let detections = detect_durations("ive had this for 3 months");
        assert!(detections.iter().any(|d| d.code == FactorCode::DurationMonthsPlus));
        let hit = detections.iter().find(|d| d.code == FactorCode::DurationMonthsPlus).unwrap();
        assert!((hit.confidence - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn few_and_couple_are_recognized_as_counts() {
        let detections = detect_durations("a couple days now");
        assert!(detections.iter().any(|d| d.code == FactorCode::DurationOnsetRecent));
    }

    #[test]
    fn recurring_cue_detected() {
        let detections = detect_durations("it comes and goes");
        assert!(detections.iter().any(|d| d.code == FactorCode::PatternRecurring));
    }

    #[test]
    fn no_duration_cues_yields_empty() {
        assert!(detect_durations("just a headache").is_empty());
    }

    #[test]
    fn duplicate_units_collapse_to_one_detection() {
        let detections = detect_durations("2 weeks, maybe 3 weeks");
        assert_eq!(detections.iter().filter(|d| d.code == FactorCode::DurationDaysWeeks).count(), 1);
    }
}
