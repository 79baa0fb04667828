//! The `Factor` entity: a single extracted signal (§3).

use crate::enums::{ComplexityDomain, FactorCode, FactorModifiability, FactorTimeHorizon, FactorType};
use crate::types::{EventId, FactorId, Timestamp, Value};
use serde::{Deserialize, Serialize};

/// A minimal reusable signal extracted from text, keyed by a stable
/// [`FactorCode`].
///
/// `domain`, `factor_type`, and `modifiability` are always the fixed
/// values for `code` (§3 invariant: "domain is the fixed domain for
/// the code"); `time_horizon` may be overridden by the detector that
/// produced this instance (e.g. the duration detector, §4.4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    id: FactorId,
    code: FactorCode,
    domain: ComplexityDomain,
    factor_type: FactorType,
    value: Value,
    confidence: f64,
    time_horizon: FactorTimeHorizon,
    modifiability: FactorModifiability,
    source_event_id: EventId,
    created_at: Timestamp,
}

impl Factor {
    /// Creates a factor for `code`, deriving `domain`/`factor_type`/
    /// `modifiability` from the taxonomy and `time_horizon` from the
    /// code's default. Use [`Factor::with_time_horizon`] to override
    /// the horizon (duration/pattern detectors do this).
    ///
    /// # Examples
    ///
    /// ```
    /// use complexity_engine::enums::FactorCode;
    /// use complexity_engine::model::Factor;
    /// use complexity_engine::types::{EventId, Timestamp, Value};
    ///
    /// let now = Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap();
    /// let factor = Factor::new(
    ///     FactorCode::SymptomHeadache,
    ///     Value::Bool(true),
    ///     0.7,
    ///     EventId::generate(),
    ///     now,
    /// );
    /// assert_eq!(factor.code(), FactorCode::SymptomHeadache);
    /// ```
    #[must_use]
    pub fn new(
        code: FactorCode,
        value: Value,
        confidence: f64,
        source_event_id: EventId,
        created_at: Timestamp,
    ) -> Self {
        Factor {
            id: FactorId::generate(),
            code,
            domain: code.domain(),
            factor_type: code.factor_type(),
            value,
            confidence: confidence.clamp(0.0, 1.0),
            time_horizon: code.default_time_horizon(),
            modifiability: code.modifiability(),
            source_event_id,
            created_at,
        }
    }

    /// Overrides the time horizon, consuming and returning `self`.
    #[must_use]
    pub fn with_time_horizon(mut self, time_horizon: FactorTimeHorizon) -> Self {
        self.time_horizon = time_horizon;
        self
    }

    /// Overrides the generated ID, consuming and returning `self`.
    /// Used when loading a factor back out of storage.
    #[must_use]
    pub fn with_id(mut self, id: FactorId) -> Self {
        self.id = id;
        self
    }

    /// This factor's identifier.
    #[must_use]
    pub fn id(&self) -> &FactorId {
        &self.id
    }

    /// The factor code.
    #[must_use]
    pub fn code(&self) -> FactorCode {
        self.code
    }

    /// The domain this factor belongs to (always `code.domain()`).
    #[must_use]
    pub fn domain(&self) -> ComplexityDomain {
        self.domain
    }

    /// The factor's type (always `code.factor_type()`).
    #[must_use]
    pub fn factor_type(&self) -> FactorType {
        self.factor_type
    }

    /// The extracted value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Confidence in `[0, 1]`.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// The time horizon, possibly overridden from the code's default.
    #[must_use]
    pub fn time_horizon(&self) -> FactorTimeHorizon {
        self.time_horizon
    }

    /// How modifiable this factor is (always `code.modifiability()`).
    #[must_use]
    pub fn modifiability(&self) -> FactorModifiability {
        self.modifiability
    }

    /// The event that produced this factor.
    #[must_use]
    pub fn source_event_id(&self) -> &EventId {
        &self.source_event_id
    }

    /// When this factor was created.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
