//! `formatUsedFactorsForUI` (§4.9): turns a snapshot's deduplicated
//! used-factor list into sorted, capped explainability chips.

use std::collections::HashSet;

use crate::enums::FactorCode;
use crate::model::UsedFactor;
use crate::taxonomy::{chip_group, chip_label};

/// The maximum number of chips ever returned (§4.9 step 4, §8
/// invariant 4).
const MAX_CHIPS: usize = 6;

/// One explainability chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip {
    /// The factor code this chip summarizes.
    pub code: FactorCode,
    /// The fixed UI label (§4.1).
    pub label: &'static str,
    /// The fixed group label (`"Body signals"`, `"Constraints"`, or
    /// `"Context"`).
    pub group: &'static str,
}

/// Deduplicates by code, sorts by `(confidence + group_boost)`
/// descending then group then label ascending, and caps at 6 (§4.9
/// step 1-4).
#[must_use]
pub fn format_used_factors_for_ui(used_factors: &[UsedFactor]) -> Vec<Chip> {
    let mut seen: HashSet<FactorCode> = HashSet::new();
    let mut scored: Vec<(Chip, f64)> = Vec::new();

    for factor in used_factors {
        if !seen.insert(factor.code()) {
            continue;
        }
        let group = chip_group(factor.code());
        let chip = Chip { code: factor.code(), label: chip_label(factor.code()), group: group.label() };
        scored.push((chip, factor.confidence() + group.boost()));
    }

    scored.sort_by(|(a_chip, a_score), (b_chip, b_score)| {
        b_score
            .partial_cmp(a_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a_chip.group.cmp(b_chip.group))
            .then_with(|| a_chip.label.cmp(b_chip.label))
    });

    scored.into_iter().take(MAX_CHIPS).map(|(chip, _)| chip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ComplexityDomain;

    fn used(code: FactorCode, confidence: f64) -> UsedFactor {
        UsedFactor::new(code, code.domain(), confidence)
    }

    #[test]
    fn deduplicates_by_code() {
        let chips = format_used_factors_for_ui(&[
            used(FactorCode::SymptomPain, 0.7),
            used(FactorCode::SymptomPain, 0.9),
        ]);
        assert_eq!(chips.len(), 1);
    }

    #[test]
    fn caps_at_six() {
        let factors: Vec<UsedFactor> = FactorCode::all().into_iter().take(10).map(|c| used(c, 0.9)).collect();
        let chips = format_used_factors_for_ui(&factors);
        assert!(chips.len() <= 6);
    }

    #[test]
    fn body_signals_outrank_equal_confidence_context() {
        let chips = format_used_factors_for_ui(&[
            used(FactorCode::GoalReassurance, 0.8),
            used(FactorCode::SymptomPain, 0.8),
        ]);
        assert_eq!(chips[0].code, FactorCode::SymptomPain);
    }

    #[test]
    fn empty_used_factors_yields_no_chips() {
        assert!(format_used_factors_for_ui(&[]).is_empty());
    }

    #[test]
    fn every_chip_domain_matches_its_code() {
        let chips = format_used_factors_for_ui(&[used(FactorCode::AccessCostBarrier, 0.8)]);
        assert_eq!(chips[0].code.domain(), ComplexityDomain::AccessToCare);
    }
}
