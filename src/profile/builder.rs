//! The profile builder (C5, §4.5).

use std::collections::{HashMap, HashSet};

use crate::enums::{ComplexityDomain, FactorCode, FactorType};
use crate::model::{ComplexityProfile, DomainCoverage, Factor};
use crate::profile::ttl::factor_ttl;
use crate::types::Timestamp;

/// Tunable inputs to the profile builder.
#[derive(Debug, Clone, Copy)]
pub struct ProfileBuildOptions<'a> {
    /// Minimum confidence a factor must have to survive (§4.5 step 1).
    pub min_confidence: f64,
    /// Codes filtered out regardless of confidence.
    pub suppressed_codes: &'a HashSet<FactorCode>,
    /// The time to evaluate TTL decay against.
    pub now: Timestamp,
}

const MAX_TOP_CONSTRAINTS: usize = 3;

/// Builds a [`ComplexityProfile`] from the full set of candidate
/// factors (persisted plus the current turn's), applying confidence
/// gating, suppression, TTL decay, per-code merge, coverage counting,
/// and top-constraint selection.
#[must_use]
pub fn build_profile(factors: &[Factor], options: ProfileBuildOptions<'_>) -> ComplexityProfile {
    let surviving: Vec<&Factor> = factors
        .iter()
        .filter(|f| f.confidence() >= options.min_confidence)
        .filter(|f| !options.suppressed_codes.contains(&f.code()))
        .filter(|f| !is_expired(f, options.now))
        .collect();

    let merged = merge_by_code(surviving);

    let mut domains_coverage: HashMap<ComplexityDomain, DomainCoverage> = HashMap::new();
    for factor in merged.values() {
        let coverage = domains_coverage.entry(factor.domain()).or_default();
        if factor.time_horizon().counts_as_acute_coverage() {
            coverage.acute += 1;
        }
        if factor.time_horizon().counts_as_chronic_coverage() {
            coverage.chronic += 1;
        }
    }

    let top_constraints = select_top_constraints(merged.values());

    ComplexityProfile::new(merged, top_constraints, domains_coverage, options.now)
}

fn is_expired(factor: &Factor, now: Timestamp) -> bool {
    match factor_ttl(factor.code(), factor.time_horizon()) {
        None => false,
        Some(ttl) => (now - factor.created_at()) > ttl,
    }
}

/// Keeps, for each code, the most recent factor; ties prefer higher
/// confidence (§4.5 step 3).
fn merge_by_code(factors: Vec<&Factor>) -> HashMap<FactorCode, Factor> {
    let mut merged: HashMap<FactorCode, Factor> = HashMap::new();
    for factor in factors {
        match merged.get(&factor.code()) {
            None => {
                merged.insert(factor.code(), factor.clone());
            }
            Some(existing) => {
                let replace = match factor.created_at().cmp(&existing.created_at()) {
                    std::cmp::Ordering::Greater => true,
                    std::cmp::Ordering::Equal => factor.confidence() > existing.confidence(),
                    std::cmp::Ordering::Less => false,
                };
                if replace {
                    merged.insert(factor.code(), factor.clone());
                }
            }
        }
    }
    merged
}

fn select_top_constraints<'a>(factors: impl Iterator<Item = &'a Factor>) -> Vec<Factor> {
    let mut candidates: Vec<&Factor> = factors
        .filter(|f| {
            f.factor_type() == FactorType::ConstrainedChoice
                || matches!(f.domain(), ComplexityDomain::AccessToCare | ComplexityDomain::ResourcesConstraints)
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.confidence().partial_cmp(&a.confidence()).unwrap_or(std::cmp::Ordering::Equal))
    });
    candidates.into_iter().take(MAX_TOP_CONSTRAINTS).cloned().collect()
}
