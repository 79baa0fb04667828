//! `EngineConfig`: the tunable constants spec §4.5-§4.7 name as bare
//! numbers, collected in one place with a `Default` matching the
//! spec's own defaults (§B design note).
//!
//! Modeled the way the teacher's `EntityModelConfig`
//! (`src/state/entity_model_config.rs`) is: a plain, builder-constructed
//! struct, no external config crate, no env parsing.

/// Tunable constants threaded into profile building and factor
/// gating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Minimum confidence a factor must have to survive into the
    /// profile (§4.5 step 1). Spec default: `0.7`.
    pub min_confidence: f64,
}

impl EngineConfig {
    /// The spec's own defaults (§4.5 step 1).
    const DEFAULT_MIN_CONFIDENCE: f64 = 0.7;

    /// Builds a config with the spec's defaults.
    #[must_use]
    pub fn new() -> Self {
        EngineConfig { min_confidence: Self::DEFAULT_MIN_CONFIDENCE }
    }

    /// Overrides `min_confidence`, consuming and returning `self`.
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::new()
    }
}
