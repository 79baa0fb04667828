//! `UsedFactor`: a compact summary of a factor consulted while
//! building a [`StateSnapshot`](crate::model::StateSnapshot) (§4.6 step 5).

use crate::enums::{ComplexityDomain, FactorCode};

/// A deduplicated, order-preserving summary of one factor the
/// snapshot builder actually consulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsedFactor {
    code: FactorCode,
    domain: ComplexityDomain,
    confidence: f64,
}

impl UsedFactor {
    /// Creates a used-factor summary.
    #[must_use]
    pub fn new(code: FactorCode, domain: ComplexityDomain, confidence: f64) -> Self {
        UsedFactor { code, domain, confidence }
    }

    /// The summarized factor's code.
    #[must_use]
    pub fn code(&self) -> FactorCode {
        self.code
    }

    /// The summarized factor's domain.
    #[must_use]
    pub fn domain(&self) -> ComplexityDomain {
        self.domain
    }

    /// The summarized factor's confidence.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_code_domain_and_confidence() {
        let used = UsedFactor::new(FactorCode::SymptomHeadache, ComplexityDomain::SymptomsBodySignals, 0.7);
        assert_eq!(used.code(), FactorCode::SymptomHeadache);
        assert_eq!(used.domain(), ComplexityDomain::SymptomsBodySignals);
        assert!((used.confidence() - 0.7).abs() < f64::EPSILON);
    }
}
