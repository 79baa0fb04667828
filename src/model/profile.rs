//! `ComplexityProfile`: the aggregated view over persisted factors (§3, §4.5).

use std::collections::HashMap;

use crate::enums::ComplexityDomain;
use crate::model::Factor;
use crate::types::Timestamp;

/// Per-domain counts of acute vs. chronic factors. The `chronic`
/// bucket includes `life_course` factors (§3, §4.5 step 4).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainCoverage {
    /// Count of kept `acute`-horizon factors in this domain.
    pub acute: u32,
    /// Count of kept `chronic` or `life_course`-horizon factors.
    pub chronic: u32,
}

/// The aggregation over all un-suppressed, non-expired persisted
/// factors (§3, §4.5). Built fresh each turn by the profile builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityProfile {
    factors_by_code: HashMap<crate::enums::FactorCode, Factor>,
    top_constraints: Vec<Factor>,
    domains_coverage: HashMap<ComplexityDomain, DomainCoverage>,
    updated_at: Timestamp,
}

impl ComplexityProfile {
    /// Assembles a profile from its already-computed parts. Used by
    /// the profile builder (§4.5); not intended to be hand-constructed
    /// piecemeal elsewhere.
    #[must_use]
    pub fn new(
        factors_by_code: HashMap<crate::enums::FactorCode, Factor>,
        top_constraints: Vec<Factor>,
        domains_coverage: HashMap<ComplexityDomain, DomainCoverage>,
        updated_at: Timestamp,
    ) -> Self {
        ComplexityProfile {
            factors_by_code,
            top_constraints,
            domains_coverage,
            updated_at,
        }
    }

    /// An empty profile, as used when `use_saved_context` /
    /// `session_use_profile` is `false` and no current-turn factors
    /// feed the aggregation either.
    #[must_use]
    pub fn empty(updated_at: Timestamp) -> Self {
        ComplexityProfile {
            factors_by_code: HashMap::new(),
            top_constraints: Vec::new(),
            domains_coverage: HashMap::new(),
            updated_at,
        }
    }

    /// The latest surviving factor for `code`, if any.
    #[must_use]
    pub fn factor(&self, code: crate::enums::FactorCode) -> Option<&Factor> {
        self.factors_by_code.get(&code)
    }

    /// All factors in the profile, one per code.
    #[must_use]
    pub fn factors_by_code(&self) -> &HashMap<crate::enums::FactorCode, Factor> {
        &self.factors_by_code
    }

    /// Up to 3 factors representing the user's strongest current
    /// constraints (§4.5 step 5).
    #[must_use]
    pub fn top_constraints(&self) -> &[Factor] {
        &self.top_constraints
    }

    /// Per-domain acute/chronic coverage counts.
    #[must_use]
    pub fn domains_coverage(&self) -> &HashMap<ComplexityDomain, DomainCoverage> {
        &self.domains_coverage
    }

    /// When this profile was built.
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_has_no_factors_or_constraints() {
        let now = Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let profile = ComplexityProfile::empty(now);
        assert!(profile.factors_by_code().is_empty());
        assert!(profile.top_constraints().is_empty());
        assert!(profile.domains_coverage().is_empty());
    }
}
