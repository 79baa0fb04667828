//! Foundational value types shared across the engine.

mod clock;
mod duration;
mod ids;
mod timestamp;
mod value;

pub use clock::{Clock, FixedClock, SystemClock};
pub use duration::Duration;
pub use ids::{EventId, FactorId, IdError, PendingFollowUpId};
pub use timestamp::{Timestamp, TimestampParseError};
pub use value::Value;
