//! The domain classifier algorithm (§4.3).
//!
//! Pure and deterministic: no I/O, same input always yields the same
//! `DomainResult`.

use crate::classifier::{DomainResult, DomainTag};
use crate::enums::{ComplexityDomain, EventIntent};
use crate::taxonomy;

/// The bias added to a domain's score when a short follow-up answer
/// is bound to the prior question's domain (§4.3 step 4).
const FOLLOW_UP_BIAS: f64 = 1.5;

/// The minimum confidence the prior question's top domain must reach
/// before the bias is applied.
const FOLLOW_UP_BIAS_THRESHOLD: f64 = 0.4;

/// The confidence threshold below which the top tag is demoted to
/// `UNKNOWN_OTHER` (§4.3 step 7).
const LOW_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Confidence assigned on a safety override (§4.3 step 2).
const SAFETY_OVERRIDE_CONFIDENCE: f64 = 0.9;

/// Classifies `text` into a primary domain plus up to two secondary
/// tags.
///
/// When `intent` is [`EventIntent::FollowUp`] and `previous_question`
/// is `Some`, a short answer ("twice a day") is biased toward the
/// domain the prior question was about.
#[must_use]
pub fn classify(text: &str, intent: EventIntent, previous_question: Option<&str>) -> DomainResult {
    let normalized = taxonomy::normalize(text);

    if let Some(rationale) = safety_override_rationale(&normalized) {
        let scored = score_domains(&normalized);
        let secondary: Vec<DomainTag> = scored.into_iter().take(2).collect();
        return DomainResult::new(
            DomainTag::new(ComplexityDomain::SafetyRisk, SAFETY_OVERRIDE_CONFIDENCE),
            secondary,
            Some(rationale.to_string()),
        );
    }

    let mut scores = raw_scores(&normalized);

    if intent == EventIntent::FollowUp {
        if let Some(previous) = previous_question {
            let previous_normalized = taxonomy::normalize(previous);
            let previous_scores = raw_scores(&previous_normalized);
            if let Some((top_domain, top_score)) = top_raw_score(&previous_scores) {
                let total: f64 = previous_scores.iter().map(|(_, s)| *s).sum();
                if total > 0.0 && top_score / total >= FOLLOW_UP_BIAS_THRESHOLD {
                    if let Some(entry) = scores.iter_mut().find(|(d, _)| *d == top_domain) {
                        entry.1 += FOLLOW_UP_BIAS;
                    }
                }
            }
        }
    }

    let total: f64 = scores.iter().map(|(_, s)| *s).sum();
    if total <= 0.0 {
        return DomainResult::new(
            DomainTag::new(ComplexityDomain::UnknownOther, 0.0),
            Vec::new(),
            Some("No domain signals detected.".to_string()),
        );
    }

    let mut tags: Vec<DomainTag> = scores
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .map(|(domain, score)| DomainTag::new(domain, score / total))
        .collect();
    tags.sort_by(domain_tag_cmp);

    let top = tags[0];
    if top.confidence() < LOW_CONFIDENCE_THRESHOLD {
        let fallback_confidence = (1.0 - top.confidence()).clamp(0.0, 1.0);
        return DomainResult::new(
            DomainTag::new(ComplexityDomain::UnknownOther, fallback_confidence),
            tags,
            None,
        );
    }

    let secondary = tags.split_off(1);
    DomainResult::new(top, secondary, None)
}

/// Sorts descending by confidence, tie-breaking on ascending domain
/// priority (§4.3 step 6: "lower domain priority" wins ties, and
/// priority 1 is highest-priority/safety).
fn domain_tag_cmp(a: &DomainTag, b: &DomainTag) -> std::cmp::Ordering {
    b.confidence()
        .partial_cmp(&a.confidence())
        .unwrap_or(std::cmp::Ordering::Equal)
        .then_with(|| a.domain().priority().cmp(&b.domain().priority()))
}

fn top_raw_score(scores: &[(ComplexityDomain, f64)]) -> Option<(ComplexityDomain, f64)> {
    scores
        .iter()
        .copied()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

fn raw_scores(normalized: &str) -> Vec<(ComplexityDomain, f64)> {
    ComplexityDomain::scoring_domains()
        .into_iter()
        .map(|domain| (domain, score_domain(normalized, domain)))
        .collect()
}

fn score_domains(normalized: &str) -> Vec<DomainTag> {
    let scores = raw_scores(normalized);
    let total: f64 = scores.iter().map(|(_, s)| *s).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut tags: Vec<DomainTag> = scores
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .map(|(domain, score)| DomainTag::new(domain, score / total))
        .collect();
    tags.sort_by(domain_tag_cmp);
    tags
}

/// `score = Σ whole-word keyword matches + 2 × phrase substring
/// matches` (§4.3 step 3).
fn score_domain(normalized: &str, domain: ComplexityDomain) -> f64 {
    let keyword_hits: usize = taxonomy::keywords(domain)
        .iter()
        .map(|kw| taxonomy::count_whole_word(normalized, kw))
        .sum();
    let phrase_hits: usize = taxonomy::phrases(domain)
        .iter()
        .filter(|phrase| taxonomy::contains_phrase(normalized, phrase))
        .count();
    keyword_hits as f64 + 2.0 * phrase_hits as f64
}

fn safety_override_rationale(normalized: &str) -> Option<&'static str> {
    let phrase_hit = taxonomy::SAFETY_RISK_PHRASES
        .iter()
        .any(|phrase| taxonomy::contains_phrase(normalized, phrase));
    let keyword_hit = taxonomy::SAFETY_RISK_KEYWORDS
        .iter()
        .any(|kw| taxonomy::contains_whole_word(normalized, kw));
    if phrase_hit || keyword_hit {
        Some("Safety risk keywords detected.")
    } else {
        None
    }
}
