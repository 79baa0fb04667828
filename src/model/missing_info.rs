//! `MissingInfo`: a single requested follow-up prompt (§3).

use crate::enums::{ComplexityDomain, MissingInfoPriority};

/// The fixed question text for the "duration" missing-info slot
/// (§4.4 step 6, §6).
pub const DURATION_QUESTION: &str = "How long has this been going on?";

/// The fixed question text for the "clarify" missing-info slot
/// (§4.4 step 6, §6).
pub const CLARIFY_QUESTION: &str = "What feels most important to focus on right now?";

/// A request for one more piece of information. At most one is
/// surfaced per turn — the highest-priority candidate wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingInfo {
    key: String,
    question: String,
    domain: ComplexityDomain,
    priority: MissingInfoPriority,
}

impl MissingInfo {
    /// Creates a new `MissingInfo` candidate.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        question: impl Into<String>,
        domain: ComplexityDomain,
        priority: MissingInfoPriority,
    ) -> Self {
        MissingInfo {
            key: key.into(),
            question: question.into(),
            domain,
            priority,
        }
    }

    /// The fixed `"duration"` missing-info candidate (§4.4 step 6).
    #[must_use]
    pub fn duration() -> Self {
        MissingInfo::new(
            "duration",
            DURATION_QUESTION,
            ComplexityDomain::DurationPattern,
            MissingInfoPriority::High,
        )
    }

    /// The fixed `"clarify"` missing-info candidate (§4.4 step 6).
    #[must_use]
    pub fn clarify(domain: ComplexityDomain) -> Self {
        MissingInfo::new("clarify", CLARIFY_QUESTION, domain, MissingInfoPriority::Medium)
    }

    /// The stable key identifying which prompt this is (e.g.
    /// `"duration"`, `"clarify"`).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The question text shown to the user.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The domain this prompt is associated with.
    #[must_use]
    pub fn domain(&self) -> ComplexityDomain {
        self.domain
    }

    /// The prompt's priority; when more than one candidate exists in
    /// a turn, the highest priority is surfaced.
    #[must_use]
    pub fn priority(&self) -> MissingInfoPriority {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_candidate_has_fixed_question() {
        let mi = MissingInfo::duration();
        assert_eq!(mi.key(), "duration");
        assert_eq!(mi.question(), "How long has this been going on?");
        assert_eq!(mi.priority(), MissingInfoPriority::High);
    }

    #[test]
    fn clarify_candidate_has_fixed_question() {
        let mi = MissingInfo::clarify(ComplexityDomain::UnknownOther);
        assert_eq!(mi.key(), "clarify");
        assert_eq!(mi.question(), "What feels most important to focus on right now?");
        assert_eq!(mi.priority(), MissingInfoPriority::Medium);
    }

    #[test]
    fn duration_outranks_clarify() {
        assert!(MissingInfo::duration().priority() > MissingInfo::clarify(ComplexityDomain::UnknownOther).priority());
    }
}
