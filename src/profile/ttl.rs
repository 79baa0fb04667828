//! TTL lookup for factor decay (§4.5 step 2).

use crate::enums::FactorCode;
use crate::types::Duration;

const EXTENDED_TTL_DAYS: i64 = 14;
const ACUTE_TTL_HOURS: i64 = 72;
const UNKNOWN_TTL_DAYS: i64 = 7;

const EXTENDED_TTL_CODES: &[FactorCode] = &[
    FactorCode::AccessCostBarrier,
    FactorCode::AccessAppointmentBarrier,
    FactorCode::ResourceTimePressure,
];

/// The time-to-live for a factor with this `code`/`time_horizon`, or
/// `None` if it never expires (`chronic`/`life_course`).
#[must_use]
pub fn factor_ttl(code: FactorCode, time_horizon: crate::enums::FactorTimeHorizon) -> Option<Duration> {
    if time_horizon.never_expires() {
        return None;
    }
    if EXTENDED_TTL_CODES.contains(&code) {
        return Some(Duration::days(EXTENDED_TTL_DAYS));
    }
    match time_horizon {
        crate::enums::FactorTimeHorizon::Acute => Some(Duration::hours(ACUTE_TTL_HOURS)),
        _ => Some(Duration::days(UNKNOWN_TTL_DAYS)),
    }
}
