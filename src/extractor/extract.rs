//! The factor extractor (C4, §4.4).

use crate::classifier::DomainResult;
use crate::enums::{EventIntent, FactorCode};
use crate::extractor::duration::detect_durations;
use crate::extractor::safety::detect_safety;
use crate::model::{Factor, MissingInfo};
use crate::taxonomy::{self, DetectorSpec};
use crate::types::{EventId, Timestamp, Value};

/// The minimum confidence a detection must reach to become a factor
/// (§4.4 step 4).
const MIN_FACTOR_CONFIDENCE: f64 = 0.6;

/// Output of a single extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Factors that survived confidence and domain-allowlist gating.
    pub factors: Vec<Factor>,
    /// At most one `MissingInfo`, chosen by the duration-then-clarify
    /// rule (§4.4 step 6).
    pub missing_info: Vec<MissingInfo>,
}

/// Runs the factor extractor over `raw_text`, given the turn's
/// classifier result, the turn's effective intent, the source event,
/// and the time to stamp new factors with.
#[must_use]
pub fn extract(
    raw_text: &str,
    domain_result: &DomainResult,
    intent: EventIntent,
    source_event_id: EventId,
    created_at: Timestamp,
) -> ExtractionResult {
    let normalized = taxonomy::normalize(raw_text);
    let allowed = domain_result.allowed_domains();

    let mut factors = Vec::new();
    let mut saw_weak_signal = false;

    for code in FactorCode::all() {
        if !allowed.contains(&code.domain()) {
            continue;
        }
        if let Some(spec) = taxonomy::detector_for(code) {
            if let Some((value, confidence)) = run_detector(&normalized, spec) {
                if confidence < MIN_FACTOR_CONFIDENCE {
                    saw_weak_signal = true;
                    continue;
                }
                if code == FactorCode::AccessCostBarrier && !has_care_context(&normalized) {
                    continue;
                }
                factors.push(Factor::new(code, value, confidence, source_event_id, created_at));
            }
        }
    }

    if allowed.contains(&FactorCode::DurationOnsetRecent.domain()) {
        for detection in detect_durations(&normalized) {
            factors.push(Factor::new(
                detection.code,
                detection.value,
                detection.confidence,
                source_event_id,
                created_at,
            ));
        }
    }

    for detection in detect_safety(&normalized) {
        factors.push(Factor::new(
            detection.code,
            detection.value,
            detection.confidence,
            source_event_id,
            created_at,
        ));
    }

    // A lone KNOWLEDGE_NEEDS_INFORMATION signal without any other
    // factor is noise rather than a real informational need, so it is
    // dropped here rather than surfaced (see the Open Questions note).
    if factors.len() == 1 && factors[0].code() == FactorCode::KnowledgeNeedsInformation {
        factors.clear();
    }

    let has_duration = factors.iter().any(|f| f.domain() == crate::enums::ComplexityDomain::DurationPattern);
    let has_symptom = factors.iter().any(|f| f.domain() == crate::enums::ComplexityDomain::SymptomsBodySignals);

    let missing_info = if has_symptom && !has_duration && intent != EventIntent::FollowUp {
        vec![MissingInfo::duration()]
    } else if factors.is_empty() && (saw_weak_signal || is_ambiguous(&normalized)) {
        vec![MissingInfo::clarify(domain_result.primary().domain())]
    } else {
        Vec::new()
    };

    ExtractionResult { factors, missing_info }
}

fn has_care_context(normalized: &str) -> bool {
    taxonomy::CARE_KEYWORDS.iter().any(|kw| taxonomy::contains_whole_word(normalized, kw))
}

fn is_ambiguous(normalized: &str) -> bool {
    taxonomy::AMBIGUITY_MARKERS.iter().any(|marker| taxonomy::contains_phrase(normalized, marker))
}

fn run_detector(normalized: &str, spec: DetectorSpec) -> Option<(Value, f64)> {
    match spec {
        DetectorSpec::Keyword(keywords) => keywords
            .iter()
            .find(|kw| taxonomy::contains_whole_word(normalized, kw))
            .map(|kw| (Value::from(*kw), taxonomy::KEYWORD_CONFIDENCE)),
        DetectorSpec::Phrase(phrases, confidence) => phrases
            .iter()
            .find(|phrase| taxonomy::contains_phrase(normalized, phrase))
            .map(|phrase| (Value::from(*phrase), confidence)),
        DetectorSpec::Either { phrases, phrase_confidence, keywords } => phrases
            .iter()
            .find(|phrase| taxonomy::contains_phrase(normalized, phrase))
            .map(|phrase| (Value::from(*phrase), phrase_confidence))
            .or_else(|| {
                keywords
                    .iter()
                    .find(|kw| taxonomy::contains_whole_word(normalized, kw))
                    .map(|kw| (Value::from(*kw), taxonomy::KEYWORD_CONFIDENCE))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    fn ts() -> Timestamp {
        Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn event_id() -> EventId {
        EventId::generate()
    }

    #[test]
    fn headache_without_duration_requests_duration() {
        let text = "I have a headache.";
        let domain_result = classify(text, EventIntent::Ask, None);
        let result = extract(text, &domain_result, EventIntent::Ask, event_id(), ts());
        assert!(result.factors.iter().any(|f| f.code() == FactorCode::SymptomHeadache));
        assert_eq!(result.missing_info.len(), 1);
        assert_eq!(result.missing_info[0].question(), crate::model::DURATION_QUESTION);
    }

    #[test]
    fn headache_with_duration_has_no_missing_info() {
        let text = "I have had a headache for weeks.";
        let domain_result = classify(text, EventIntent::Ask, None);
        let result = extract(text, &domain_result, EventIntent::Ask, event_id(), ts());
        assert!(result.factors.iter().any(|f| f.code() == FactorCode::SymptomHeadache));
        assert!(result.factors.iter().any(|f| f.code() == FactorCode::DurationDaysWeeks));
        assert!(result.missing_info.is_empty());
    }

    #[test]
    fn cost_barrier_requires_care_context() {
        let text = "I cant afford rent this month.";
        let domain_result = classify(text, EventIntent::Ask, None);
        let result = extract(text, &domain_result, EventIntent::Ask, event_id(), ts());
        assert!(!result.factors.iter().any(|f| f.code() == FactorCode::AccessCostBarrier));
    }

    #[test]
    fn cost_barrier_fires_with_care_context() {
        let text = "I cant afford to see a doctor.";
        let domain_result = classify(text, EventIntent::Ask, None);
        let result = extract(text, &domain_result, EventIntent::Ask, event_id(), ts());
        assert!(result.factors.iter().any(|f| f.code() == FactorCode::AccessCostBarrier));
    }

    #[test]
    fn safety_factors_always_allowed() {
        let text = "I feel suicidal.";
        let domain_result = classify(text, EventIntent::Ask, None);
        let result = extract(text, &domain_result, EventIntent::Ask, event_id(), ts());
        assert!(result.factors.iter().any(|f| f.code() == FactorCode::SafetySelfHarm));
    }

    #[test]
    fn lone_knowledge_factor_is_dropped() {
        let text = "I am confused.";
        let domain_result = classify(text, EventIntent::Ask, None);
        let result = extract(text, &domain_result, EventIntent::Ask, event_id(), ts());
        assert!(result.factors.is_empty());
    }

    #[test]
    fn ambiguous_text_with_no_factors_requests_clarification() {
        let text = "not sure, hard to explain";
        let domain_result = classify(text, EventIntent::Ask, None);
        let result = extract(text, &domain_result, EventIntent::Ask, event_id(), ts());
        assert!(result.factors.is_empty());
        assert_eq!(result.missing_info.len(), 1);
    }
}
