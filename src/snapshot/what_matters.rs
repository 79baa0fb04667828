//! "What matters" bullet selection (§4.6 step 4).

use crate::model::Factor;
use crate::taxonomy;

const MAX_BULLETS: usize = 3;

/// Orders `factors` by the fixed domain priority, then confidence
/// descending, then recency, and maps up to 3 to their canonical
/// bullet copy. Falls back to the single no-factors bullet when
/// `factors` is empty.
#[must_use]
pub fn what_matters(factors: &[Factor]) -> Vec<String> {
    if factors.is_empty() {
        return vec![taxonomy::NO_FACTORS_BULLET.to_string()];
    }

    let mut ordered: Vec<&Factor> = factors.iter().collect();
    ordered.sort_by(|a, b| {
        taxonomy::what_matters_domain_rank(a.domain())
            .cmp(&taxonomy::what_matters_domain_rank(b.domain()))
            .then_with(|| b.confidence().partial_cmp(&a.confidence()).unwrap_or(std::cmp::Ordering::Equal))
            .then_with(|| b.created_at().cmp(&a.created_at()))
    });

    ordered.into_iter().take(MAX_BULLETS).map(|f| taxonomy::bullet_copy(f.code()).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::FactorCode;
    use crate::types::{EventId, Timestamp, Value};

    fn ts() -> Timestamp {
        Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn factor(code: FactorCode, confidence: f64) -> Factor {
        Factor::new(code, Value::Bool(true), confidence, EventId::generate(), ts())
    }

    #[test]
    fn empty_factors_returns_fallback_bullet() {
        assert_eq!(what_matters(&[]), vec![taxonomy::NO_FACTORS_BULLET.to_string()]);
    }

    #[test]
    fn symptoms_sort_before_goals() {
        let factors = vec![factor(FactorCode::GoalReassurance, 0.9), factor(FactorCode::SymptomHeadache, 0.6)];
        let bullets = what_matters(&factors);
        assert_eq!(bullets[0], taxonomy::bullet_copy(FactorCode::SymptomHeadache));
    }

    #[test]
    fn caps_at_three_bullets() {
        let factors = vec![
            factor(FactorCode::SymptomHeadache, 0.9),
            factor(FactorCode::SymptomPain, 0.9),
            factor(FactorCode::SymptomNausea, 0.9),
            factor(FactorCode::SymptomDizziness, 0.9),
        ];
        assert_eq!(what_matters(&factors).len(), 3);
    }
}
