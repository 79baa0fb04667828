//! Output types for the domain classifier (§4.3).

use crate::enums::ComplexityDomain;

/// A single domain tag with its confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainTag {
    domain: ComplexityDomain,
    confidence: f64,
}

impl DomainTag {
    /// Creates a domain tag, clamping confidence to `[0, 1]`.
    #[must_use]
    pub fn new(domain: ComplexityDomain, confidence: f64) -> Self {
        DomainTag {
            domain,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// The tagged domain.
    #[must_use]
    pub fn domain(&self) -> ComplexityDomain {
        self.domain
    }

    /// The tag's confidence, in `[0, 1]`.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// The classifier's output: a primary domain plus up to two secondary
/// tags (§4.3).
#[derive(Debug, Clone, PartialEq)]
pub struct DomainResult {
    primary: DomainTag,
    secondary: Vec<DomainTag>,
    rationale: Option<String>,
}

impl DomainResult {
    /// Assembles a classifier result. `secondary` is truncated to at
    /// most 2 entries and has any tag matching `primary`'s domain
    /// removed (§8 invariant 1).
    #[must_use]
    pub fn new(primary: DomainTag, mut secondary: Vec<DomainTag>, rationale: Option<String>) -> Self {
        secondary.retain(|tag| tag.domain() != primary.domain());
        secondary.truncate(2);
        DomainResult { primary, secondary, rationale }
    }

    /// The primary domain tag.
    #[must_use]
    pub fn primary(&self) -> DomainTag {
        self.primary
    }

    /// Up to 2 secondary domain tags, excluding the primary's domain.
    #[must_use]
    pub fn secondary(&self) -> &[DomainTag] {
        &self.secondary
    }

    /// A human-readable rationale, present for safety overrides and
    /// the zero-signal fallback (§4.3 steps 2 and 5).
    #[must_use]
    pub fn rationale(&self) -> Option<&str> {
        self.rationale.as_deref()
    }

    /// `{primary} ∪ secondary ∪ {SAFETY_RISK}`, expanded to all domains
    /// when primary is `UNKNOWN_OTHER`, and always including
    /// `DURATION_PATTERN` alongside `SYMPTOMS_BODY_SIGNALS` (§4.4 step 2).
    #[must_use]
    pub fn allowed_domains(&self) -> Vec<ComplexityDomain> {
        if self.primary.domain() == ComplexityDomain::UnknownOther {
            return ComplexityDomain::all().to_vec();
        }

        let mut allowed = vec![self.primary.domain(), ComplexityDomain::SafetyRisk];
        for tag in &self.secondary {
            if !allowed.contains(&tag.domain()) {
                allowed.push(tag.domain());
            }
        }
        if allowed.contains(&ComplexityDomain::SymptomsBodySignals)
            && !allowed.contains(&ComplexityDomain::DurationPattern)
        {
            allowed.push(ComplexityDomain::DurationPattern);
        }
        allowed
    }
}
