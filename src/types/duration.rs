//! Duration type for TTL and time-span arithmetic.
//!
//! Stored internally as whole seconds. Used for `StateSnapshot`/profile
//! TTL comparisons (§4.5) where the spec expresses lifetimes in hours
//! and days.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A span of time, stored as whole seconds.
///
/// # Examples
///
/// ```
/// use complexity_engine::types::Duration;
///
/// let ttl = Duration::hours(72);
/// assert_eq!(ttl.as_seconds(), 72 * 3600);
/// assert_eq!(Duration::days(3).as_seconds(), ttl.as_seconds());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Duration {
    seconds: i64,
}

impl Duration {
    const SECONDS_PER_MINUTE: i64 = 60;
    const SECONDS_PER_HOUR: i64 = 3600;
    const SECONDS_PER_DAY: i64 = 86_400;

    /// A zero-length duration.
    #[must_use]
    pub const fn zero() -> Self {
        Duration { seconds: 0 }
    }

    /// Builds a duration from a count of seconds.
    #[must_use]
    pub const fn seconds(seconds: i64) -> Self {
        Duration { seconds }
    }

    /// Builds a duration from a count of minutes.
    #[must_use]
    pub const fn minutes(minutes: i64) -> Self {
        Duration::seconds(minutes * Self::SECONDS_PER_MINUTE)
    }

    /// Builds a duration from a count of hours.
    #[must_use]
    pub const fn hours(hours: i64) -> Self {
        Duration::seconds(hours * Self::SECONDS_PER_HOUR)
    }

    /// Builds a duration from a count of days.
    #[must_use]
    pub const fn days(days: i64) -> Self {
        Duration::seconds(days * Self::SECONDS_PER_DAY)
    }

    /// Returns the duration as whole seconds.
    #[must_use]
    pub const fn as_seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the duration as whole hours (truncating).
    #[must_use]
    pub const fn as_hours(&self) -> i64 {
        self.seconds / Self::SECONDS_PER_HOUR
    }

    /// Returns the duration as whole days (truncating).
    #[must_use]
    pub const fn as_days(&self) -> i64 {
        self.seconds / Self::SECONDS_PER_DAY
    }

    /// Converts to a `chrono::Duration` for arithmetic against `Timestamp`.
    #[must_use]
    pub fn to_chrono(self) -> chrono::Duration {
        chrono::Duration::seconds(self.seconds)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::seconds(self.seconds + rhs.seconds)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration::seconds(self.seconds - rhs.seconds)
    }
}
