//! Band computation for the state snapshot builder (§4.6 steps 1-3).

use crate::classifier::DomainResult;
use crate::enums::{ComplexityDomain, FactorCode, FrictionBand, RiskBand, UncertaintyBand};
use crate::model::{Factor, MissingInfo};

const HIGH_RISK_MIN_CONFIDENCE: f64 = 0.8;
const HIGH_FRICTION_MIN_CONFIDENCE: f64 = 0.75;
const MEDIUM_FRICTION_MIN_CONFIDENCE: f64 = 0.6;
const LOW_UNCERTAINTY_MIN_AVG_CONFIDENCE: f64 = 0.7;

const HIGH_RISK_CODES: &[FactorCode] = &[FactorCode::SymptomBreathlessness, FactorCode::SymptomDizziness];
const MEDIUM_RISK_CODES: &[FactorCode] = &[
    FactorCode::SymptomPain,
    FactorCode::SymptomHeadache,
    FactorCode::SymptomNausea,
    FactorCode::EmotionPanic,
    FactorCode::EmotionAnxietyStress,
];
const HIGH_FRICTION_CODES: &[FactorCode] = &[
    FactorCode::AccessCostBarrier,
    FactorCode::AccessAppointmentBarrier,
    FactorCode::ResourceTimePressure,
    FactorCode::ResourceCaregivingLoad,
    FactorCode::CapacityFatigue,
    FactorCode::CapacityPoorSleep,
];
const MEDIUM_FRICTION_CODES: &[FactorCode] =
    &[FactorCode::ResourceFinancialStrain, FactorCode::CapacityLowFocus, FactorCode::SocialSupportLimited];

/// The risk band plus the factors that were consulted to decide it
/// (§4.6 step 1, feeding the used-factor buffer).
#[must_use]
pub fn risk_band<'a>(domain_result: &DomainResult, factors: &'a [Factor]) -> (RiskBand, Vec<&'a Factor>) {
    let safety_factors: Vec<&Factor> =
        factors.iter().filter(|f| matches!(f.code(), FactorCode::SafetyRedFlag | FactorCode::SafetySelfHarm)).collect();

    let primary_or_secondary_safety = domain_result.primary().domain() == ComplexityDomain::SafetyRisk
        || domain_result.secondary().iter().any(|tag| tag.domain() == ComplexityDomain::SafetyRisk);

    if primary_or_secondary_safety || !safety_factors.is_empty() {
        return (RiskBand::Urgent, safety_factors);
    }

    let high: Vec<&Factor> = factors
        .iter()
        .filter(|f| HIGH_RISK_CODES.contains(&f.code()) && f.confidence() >= HIGH_RISK_MIN_CONFIDENCE)
        .collect();
    if !high.is_empty() {
        return (RiskBand::High, high);
    }

    let medium: Vec<&Factor> = factors.iter().filter(|f| MEDIUM_RISK_CODES.contains(&f.code())).collect();
    if !medium.is_empty() {
        return (RiskBand::Medium, medium);
    }

    (RiskBand::Low, Vec::new())
}

/// The uncertainty band (§4.6 step 2).
#[must_use]
pub fn uncertainty_band(missing_info: &[MissingInfo], factors: &[Factor]) -> UncertaintyBand {
    if !missing_info.is_empty() {
        return UncertaintyBand::High;
    }
    if factors.is_empty() {
        return UncertaintyBand::Medium;
    }
    let average: f64 = factors.iter().map(Factor::confidence).sum::<f64>() / factors.len() as f64;
    if average >= LOW_UNCERTAINTY_MIN_AVG_CONFIDENCE {
        UncertaintyBand::Low
    } else {
        UncertaintyBand::Medium
    }
}

/// The friction band plus the factors that decided it (§4.6 step 3).
#[must_use]
pub fn friction_band<'a>(factors: &'a [Factor]) -> (FrictionBand, Vec<&'a Factor>) {
    let high: Vec<&Factor> = factors
        .iter()
        .filter(|f| HIGH_FRICTION_CODES.contains(&f.code()) && f.confidence() >= HIGH_FRICTION_MIN_CONFIDENCE)
        .collect();
    if !high.is_empty() {
        return (FrictionBand::High, high);
    }

    let medium: Vec<&Factor> = factors
        .iter()
        .filter(|f| MEDIUM_FRICTION_CODES.contains(&f.code()) && f.confidence() >= MEDIUM_FRICTION_MIN_CONFIDENCE)
        .collect();
    if !medium.is_empty() {
        return (FrictionBand::Medium, medium);
    }

    (FrictionBand::Low, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{DomainResult, DomainTag};
    use crate::types::{EventId, Timestamp, Value};

    fn ts() -> Timestamp {
        Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn factor(code: FactorCode, confidence: f64) -> Factor {
        Factor::new(code, Value::Bool(true), confidence, EventId::generate(), ts())
    }

    fn neutral_domain_result() -> DomainResult {
        DomainResult::new(DomainTag::new(ComplexityDomain::SymptomsBodySignals, 0.8), Vec::new(), None)
    }

    #[test]
    fn safety_factor_forces_urgent() {
        let factors = vec![factor(FactorCode::SafetyRedFlag, 0.95)];
        let (band, used) = risk_band(&neutral_domain_result(), &factors);
        assert_eq!(band, RiskBand::Urgent);
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn breathlessness_above_threshold_is_high() {
        let factors = vec![factor(FactorCode::SymptomBreathlessness, 0.85)];
        let (band, _) = risk_band(&neutral_domain_result(), &factors);
        assert_eq!(band, RiskBand::High);
    }

    #[test]
    fn headache_is_medium() {
        let factors = vec![factor(FactorCode::SymptomHeadache, 0.7)];
        let (band, _) = risk_band(&neutral_domain_result(), &factors);
        assert_eq!(band, RiskBand::Medium);
    }

    #[test]
    fn no_factors_is_low() {
        let (band, _) = risk_band(&neutral_domain_result(), &[]);
        assert_eq!(band, RiskBand::Low);
    }

    #[test]
    fn missing_info_forces_high_uncertainty() {
        let band = uncertainty_band(&[MissingInfo::duration()], &[]);
        assert_eq!(band, UncertaintyBand::High);
    }

    #[test]
    fn no_factors_is_medium_uncertainty() {
        assert_eq!(uncertainty_band(&[], &[]), UncertaintyBand::Medium);
    }

    #[test]
    fn high_average_confidence_is_low_uncertainty() {
        let factors = vec![factor(FactorCode::SymptomHeadache, 0.9)];
        assert_eq!(uncertainty_band(&[], &factors), UncertaintyBand::Low);
    }

    #[test]
    fn cost_barrier_above_threshold_is_high_friction() {
        let factors = vec![factor(FactorCode::AccessCostBarrier, 0.8)];
        let (band, _) = friction_band(&factors);
        assert_eq!(band, FrictionBand::High);
    }

    #[test]
    fn financial_strain_is_medium_friction() {
        let factors = vec![factor(FactorCode::ResourceFinancialStrain, 0.65)];
        let (band, _) = friction_band(&factors);
        assert_eq!(band, FrictionBand::Medium);
    }
}
