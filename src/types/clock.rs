//! Time source abstraction.
//!
//! Every component that needs "now" (profile TTL decay, snapshot
//! staleness, pending-follow-up timeouts) takes a `&dyn Clock` rather
//! than calling `Utc::now()` directly, so tests can pin time (§9 design
//! note: "inject a `now()` clock rather than reading the system clock
//! directly, so TTL and decay logic is deterministically testable").

use std::sync::Mutex;

use crate::types::Timestamp;

/// A source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

/// A `Clock` backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_chrono(chrono::Utc::now())
    }
}

/// A `Clock` pinned to a fixed, settable instant. Intended for tests.
///
/// # Examples
///
/// ```
/// use complexity_engine::types::{Clock, FixedClock, Timestamp};
///
/// let t0 = Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap();
/// let clock = FixedClock::new(t0);
/// assert_eq!(clock.now(), t0);
/// ```
pub struct FixedClock {
    now: Mutex<Timestamp>,
}

impl FixedClock {
    /// Creates a clock pinned to `now`.
    #[must_use]
    pub fn new(now: Timestamp) -> Self {
        FixedClock {
            now: Mutex::new(now),
        }
    }

    /// Advances the pinned instant forward.
    pub fn advance(&self, by: crate::types::Duration) {
        let mut guard = self.now.lock().expect("FixedClock mutex poisoned");
        *guard = *guard + by;
    }

    /// Overwrites the pinned instant.
    pub fn set(&self, now: Timestamp) {
        let mut guard = self.now.lock().expect("FixedClock mutex poisoned");
        *guard = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().expect("FixedClock mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Duration;

    #[test]
    fn fixed_clock_holds_its_value() {
        let t0 = Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::new(t0);
        assert_eq!(clock.now(), t0);
        assert_eq!(clock.now(), t0);
    }

    #[test]
    fn fixed_clock_advances() {
        let t0 = Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::new(t0);
        clock.advance(Duration::hours(2));
        assert_eq!(clock.now(), t0 + Duration::hours(2));
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
