//! Timestamp type for absolute UTC time representation.
//!
//! Unlike the teacher's timezone-naive `Timestamp`, this engine's
//! timestamps are always UTC (§3: "created_at (ISO-8601 UTC)") and
//! render with millisecond precision (§6).

use crate::types::Duration;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Error returned when a timestamp cannot be parsed or constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampParseError {
    /// The string was not valid RFC 3339 / ISO-8601.
    InvalidFormat(String),
    /// The date components were invalid (e.g. month 13).
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl fmt::Display for TimestampParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampParseError::InvalidFormat(s) => write!(f, "invalid timestamp format: {s}"),
            TimestampParseError::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year}-{month:02}-{day:02}")
            }
        }
    }
}

impl std::error::Error for TimestampParseError {}

/// An absolute UTC timestamp with millisecond precision.
///
/// # Examples
///
/// ```
/// use complexity_engine::types::{Duration, Timestamp};
///
/// let t0 = Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap();
/// let t1 = t0 + Duration::days(3);
/// assert_eq!((t1 - t0).as_days(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    inner: DateTime<Utc>,
}

impl Timestamp {
    /// Constructs a timestamp from calendar/clock components.
    ///
    /// # Errors
    ///
    /// Returns `TimestampParseError::InvalidDate` if the components do
    /// not form a valid date/time.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Result<Self, TimestampParseError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(
            TimestampParseError::InvalidDate { year, month, day },
        )?;
        let naive = date
            .and_hms_opt(hour, min, sec)
            .ok_or(TimestampParseError::InvalidDate { year, month, day })?;
        Ok(Timestamp {
            inner: DateTime::from_naive_utc_and_offset(naive, Utc),
        })
    }

    /// Wraps an existing `chrono::DateTime<Utc>`.
    #[must_use]
    pub const fn from_chrono(inner: DateTime<Utc>) -> Self {
        Timestamp { inner }
    }

    /// Returns the inner `chrono::DateTime<Utc>`.
    #[must_use]
    pub const fn as_chrono(&self) -> DateTime<Utc> {
        self.inner
    }

    /// Parses an RFC 3339 / ISO-8601 string.
    ///
    /// # Errors
    ///
    /// Returns `TimestampParseError::InvalidFormat` if the string is not
    /// valid RFC 3339.
    pub fn parse(s: &str) -> Result<Self, TimestampParseError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Timestamp {
                inner: dt.with_timezone(&Utc),
            })
            .map_err(|_| TimestampParseError::InvalidFormat(s.to_string()))
    }

    /// Renders as ISO-8601 UTC with millisecond precision, e.g.
    /// `2026-07-28T09:30:00.000Z` (§6).
    #[must_use]
    pub fn to_iso8601_millis(&self) -> String {
        self.inner.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso8601_millis())
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp {
            inner: self.inner + rhs.to_chrono(),
        }
    }
}

impl Sub for Timestamp {
    type Output = Duration;

    fn sub(self, rhs: Timestamp) -> Duration {
        let delta = self.inner - rhs.inner;
        Duration::seconds(delta.num_seconds())
    }
}
