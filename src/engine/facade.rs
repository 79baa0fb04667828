//! `ComplexityEngine`: the orchestrator wiring C1-C10 into the
//! `processSmartInput` flow (§2, §6).

use std::collections::HashSet;
use std::sync::Arc;

use crate::classifier::{classify, DomainResult};
use crate::controls::{get_use_saved_context, set_use_saved_context, ControlsSnapshot, SessionUseProfile};
use crate::engine::{EngineConfig, EngineError};
use crate::enums::{
    EventIntent, EventSaveMode, FactorCode, FrictionBand, NextActionKind, NextStepCategory, RiskBand,
    UncertaintyBand,
};
use crate::extractor::extract;
use crate::followup::{resolve_pending, update_pending};
use crate::model::{ComplexityProfile, Event, Factor, MissingInfo, PendingFollowUp, StateSnapshot};
use crate::profile::{build_profile, ProfileBuildOptions};
use crate::response::{build_response_model, ResponseModel};
use crate::router::{route, RoutedStep};
use crate::snapshot::build_snapshot;
use crate::store::{StorageError, Store};
use crate::types::{Clock, EventId, SystemClock, Timestamp};

/// A single call to `processSmartInput` (§6).
#[derive(Debug, Clone)]
pub struct ProcessSmartInputRequest {
    /// The free-text user input.
    pub input_text: String,
    /// The caller-declared intent. May be overridden to `FollowUp` if
    /// a pending question exists (§4.8).
    pub intent: EventIntent,
    /// Governs what this turn is allowed to persist (§3, §4.2).
    pub save_mode: EventSaveMode,
    /// An explicit event ID, for deterministic tests or a caller that
    /// pre-allocates IDs. A fresh ID is generated when absent.
    pub event_id: Option<EventId>,
    /// An explicit creation time, for deterministic tests. Falls back
    /// to the engine's clock when absent.
    pub created_at: Option<Timestamp>,
    /// Whether to also return a `DebugModel` for introspection/testing
    /// (§6).
    pub include_debug: bool,
}

impl ProcessSmartInputRequest {
    /// Builds a request with the common defaults: no explicit ID or
    /// time, no debug model.
    #[must_use]
    pub fn new(input_text: impl Into<String>, intent: EventIntent, save_mode: EventSaveMode) -> Self {
        ProcessSmartInputRequest {
            input_text: input_text.into(),
            intent,
            save_mode,
            event_id: None,
            created_at: None,
            include_debug: false,
        }
    }

    /// Requests a `DebugModel` alongside the normal result, consuming
    /// and returning `self`.
    #[must_use]
    pub fn with_debug(mut self) -> Self {
        self.include_debug = true;
        self
    }
}

/// The derived bands and next-action kind, exposed in the debug model
/// (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotBands {
    /// The risk band (§4.6 step 1).
    pub risk_band: RiskBand,
    /// The friction band (§4.6 step 3).
    pub friction_band: FrictionBand,
    /// The uncertainty band (§4.6 step 2).
    pub uncertainty_band: UncertaintyBand,
    /// The decided next-action kind (§4.6 step 6).
    pub next_action_kind: NextActionKind,
}

/// The two control toggles as they stood for this turn (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    /// The persistent `use_saved_context` flag.
    pub use_saved_context: bool,
    /// The process-local `session_use_profile` flag.
    pub session_use_profile: bool,
}

/// Introspection payload returned only when `include_debug = true`
/// (§6).
#[derive(Debug, Clone)]
pub struct DebugModel {
    /// The classifier's raw output.
    pub domains: DomainResult,
    /// The factors this turn contributed (post-suppression).
    pub factors: Vec<Factor>,
    /// The missing-info candidates this turn produced.
    pub missing_info: Vec<MissingInfo>,
    /// The derived bands and next-action kind.
    pub snapshot_bands: SnapshotBands,
    /// The router's chosen category.
    pub router_category: NextStepCategory,
    /// The two control toggles as they stood for this turn.
    pub toggles: Toggles,
    /// The pending follow-up row after this turn completed, if any.
    pub pending_follow_up: Option<PendingFollowUp>,
}

/// The full result of one `processSmartInput` call (§6).
#[derive(Debug, Clone)]
pub struct ProcessedTurn {
    /// The immutable event record created for this turn.
    pub event: Event,
    /// The classifier's output.
    pub domain_result: DomainResult,
    /// The factors and missing-info this turn extracted
    /// (post-suppression).
    pub extracted_factors: Vec<Factor>,
    /// The missing-info candidates this turn produced.
    pub missing_info: Vec<MissingInfo>,
    /// The aggregated profile this turn's snapshot was built against.
    pub profile: ComplexityProfile,
    /// The per-turn derived snapshot.
    pub snapshot: StateSnapshot,
    /// The assembled, user-facing response.
    pub response_model: ResponseModel,
    /// Present only when the request set `include_debug = true`.
    pub debug_model: Option<DebugModel>,
}

/// The complexity reasoning engine: a single-threaded cooperative
/// request handler (§5). One `ComplexityEngine` value models one
/// session — it owns the process-local `session_use_profile` flag
/// (§4.10) alongside a handle to the shared persistent store.
pub struct ComplexityEngine {
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
    config: EngineConfig,
    session_use_profile: SessionUseProfile,
}

impl ComplexityEngine {
    /// Builds an engine over `store`, using the system clock and
    /// default config.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        ComplexityEngine::with_clock_and_config(store, Arc::new(SystemClock), EngineConfig::default())
    }

    /// Builds an engine with an explicit clock and config, for
    /// deterministic tests.
    #[must_use]
    pub fn with_clock_and_config(store: Arc<dyn Store>, clock: Arc<dyn Clock>, config: EngineConfig) -> Self {
        ComplexityEngine { store, clock, config, session_use_profile: SessionUseProfile::new() }
    }

    /// The primary operation (§2, §6): classify, extract, filter by
    /// suppression, persist if allowed, build the profile and
    /// snapshot, route, assemble the response, and update the pending
    /// follow-up slot.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` for empty text, or
    /// `EngineError::Storage` if the backing store is unavailable. No
    /// partial write is ever committed (§5, §7).
    pub fn process_smart_input(&self, request: ProcessSmartInputRequest) -> Result<ProcessedTurn, EngineError> {
        if request.input_text.trim().is_empty() {
            return Err(EngineError::InvalidInput("input_text must not be empty".to_string()));
        }

        let now = request.created_at.unwrap_or_else(|| self.clock.now());

        let resolved = resolve_pending(self.store.as_ref(), request.intent)?;

        let mut event = match request.event_id {
            Some(id) => Event::with_id(id, resolved.intent, request.save_mode, now),
            None => Event::new(resolved.intent, request.save_mode, now),
        };
        if let Some(parent) = resolved.parent_event_id {
            event = event.with_parent_event_id(parent);
        }
        if request.save_mode.persists_raw_text() {
            event = event.with_raw_text(request.input_text.clone());
        }

        let domain_result = classify(&request.input_text, resolved.intent, resolved.previous_question.as_deref());
        let extraction = extract(&request.input_text, &domain_result, resolved.intent, event.id().clone(), now);

        let suppressed = self.store.suppressed_set()?;
        let kept_factors: Vec<Factor> =
            extraction.factors.into_iter().filter(|f| !suppressed.contains(&f.code())).collect();

        let use_saved_context = get_use_saved_context(self.store.as_ref())?;
        let session_use_profile = self.session_use_profile.get();
        let controls = ControlsSnapshot { use_saved_context, session_use_profile };

        // §4.10: when use_saved_context is false, this turn persists no
        // factors unless save_mode explicitly asks to save a journal entry.
        let factors_to_persist: &[Factor] =
            if !use_saved_context && request.save_mode != EventSaveMode::SaveJournal { &[] } else { &kept_factors };

        self.store.save_event_and_factors(&event, factors_to_persist)?;

        let mut candidate_factors =
            if controls.effective_use_profile() { self.store.load_all_factors()? } else { Vec::new() };
        candidate_factors.extend(kept_factors.iter().cloned());

        let profile = build_profile(
            &candidate_factors,
            ProfileBuildOptions { min_confidence: self.config.min_confidence, suppressed_codes: &suppressed, now },
        );

        let snapshot = build_snapshot(&event, &domain_result, &kept_factors, &extraction.missing_info);
        let routed = route(&snapshot);
        let response_model = build_response_model(&snapshot, &routed, controls);

        update_pending(self.store.as_ref(), &event, &snapshot, &extraction.missing_info)?;

        let debug_model = if request.include_debug {
            Some(DebugModel {
                domains: domain_result.clone(),
                factors: kept_factors.clone(),
                missing_info: extraction.missing_info.clone(),
                snapshot_bands: SnapshotBands {
                    risk_band: snapshot.risk_band(),
                    friction_band: snapshot.friction_band(),
                    uncertainty_band: snapshot.uncertainty_band(),
                    next_action_kind: snapshot.next_action_kind(),
                },
                router_category: routed.category,
                toggles: Toggles { use_saved_context, session_use_profile },
                pending_follow_up: self.store.get_pending()?,
            })
        } else {
            None
        };

        Ok(ProcessedTurn {
            event,
            domain_result,
            extracted_factors: kept_factors,
            missing_info: extraction.missing_info,
            profile,
            snapshot,
            response_model,
            debug_model,
        })
    }

    /// Adds `code` to the suppression set (§6).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the backing store is
    /// unavailable.
    pub fn suppress_factor_code(&self, code: FactorCode) -> Result<(), EngineError> {
        self.store.suppress(code)?;
        Ok(())
    }

    /// Removes `code` from the suppression set (§6).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the backing store is
    /// unavailable.
    pub fn unsuppress_factor_code(&self, code: FactorCode) -> Result<(), EngineError> {
        self.store.unsuppress(code)?;
        Ok(())
    }

    /// Returns the current suppression set (§6).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the backing store is
    /// unavailable.
    pub fn get_suppressed_factor_codes(&self) -> Result<HashSet<FactorCode>, EngineError> {
        Ok(self.store.suppressed_set()?)
    }

    /// Sets the persistent `use_saved_context` flag (§4.10, §6).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the backing store is
    /// unavailable.
    pub fn set_use_saved_context(&self, value: bool) -> Result<(), EngineError> {
        set_use_saved_context(self.store.as_ref(), value)?;
        Ok(())
    }

    /// Reads the persistent `use_saved_context` flag (§4.10, §6).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the backing store is
    /// unavailable.
    pub fn get_use_saved_context(&self) -> Result<bool, EngineError> {
        Ok(get_use_saved_context(self.store.as_ref())?)
    }

    /// Sets the process-local `session_use_profile` flag (§4.10, §6).
    pub fn set_session_use_profile(&self, value: bool) {
        self.session_use_profile.set(value);
    }

    /// Reads the process-local `session_use_profile` flag (§4.10,
    /// §6).
    #[must_use]
    pub fn get_session_use_profile(&self) -> bool {
        self.session_use_profile.get()
    }

    /// Clears the pending follow-up and resets `session_use_profile`
    /// to its default (§4.10, §6).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the backing store is
    /// unavailable.
    pub fn clear_session_context(&self) -> Result<(), EngineError> {
        self.store.clear_pending()?;
        self.session_use_profile.reset();
        Ok(())
    }

    /// Returns the current pending follow-up row, if any (§6).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the backing store is
    /// unavailable.
    pub fn get_pending_follow_up(&self) -> Result<Option<PendingFollowUp>, EngineError> {
        Ok(self.store.get_pending()?)
    }
}

impl From<StorageError> for EngineError {
    fn from(err: StorageError) -> Self {
        EngineError::Storage(err)
    }
}
