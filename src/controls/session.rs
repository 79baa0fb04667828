//! The process-local half of user controls: `session_use_profile`
//! (§4.10, §9 design note: "a well-documented process-global with
//! `clearSessionContext()` as the sole reset affordance").

use std::sync::atomic::{AtomicBool, Ordering};

const DEFAULT_SESSION_USE_PROFILE: bool = true;

/// Process-local `session_use_profile` flag. Lives for the lifetime of
/// the owning [`crate::engine::ComplexityEngine`]; never persisted.
///
/// # Examples
///
/// ```
/// use complexity_engine::controls::SessionUseProfile;
///
/// let flag = SessionUseProfile::new();
/// assert!(flag.get());
/// flag.set(false);
/// assert!(!flag.get());
/// flag.reset();
/// assert!(flag.get());
/// ```
#[derive(Debug)]
pub struct SessionUseProfile {
    flag: AtomicBool,
}

impl Default for SessionUseProfile {
    fn default() -> Self {
        SessionUseProfile { flag: AtomicBool::new(DEFAULT_SESSION_USE_PROFILE) }
    }
}

impl SessionUseProfile {
    /// Creates a flag at its default value (`true`).
    #[must_use]
    pub fn new() -> Self {
        SessionUseProfile::default()
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Sets the value for the remainder of the process lifetime (or
    /// until [`SessionUseProfile::reset`]).
    pub fn set(&self, value: bool) {
        self.flag.store(value, Ordering::SeqCst);
    }

    /// Resets to the default (`true`). The only affordance
    /// `clearSessionContext` uses to touch this flag (§4.10).
    pub fn reset(&self) {
        self.flag.store(DEFAULT_SESSION_USE_PROFILE, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_true() {
        assert!(SessionUseProfile::new().get());
    }

    #[test]
    fn set_then_reset_restores_default() {
        let flag = SessionUseProfile::new();
        flag.set(false);
        assert!(!flag.get());
        flag.reset();
        assert!(flag.get());
    }
}
