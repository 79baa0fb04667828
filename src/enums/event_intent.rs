//! What the caller was trying to do with a given turn.

use serde::{Deserialize, Serialize};

/// The caller-declared intent of a turn.
///
/// `FollowUp` may also be assigned internally by the follow-up
/// orchestrator (§4.8) when a pending question exists, regardless of
/// what the caller originally passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventIntent {
    /// The user is asking a question.
    Ask,
    /// The user is journaling, with no specific question.
    Journal,
    /// The turn is a response to a pending follow-up question.
    FollowUp,
    /// Ambiguous mix of intents.
    Mixed,
    /// The user wants this logged with no response flow.
    LogOnly,
}

impl EventIntent {
    /// Stable identifier used in persistence.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            EventIntent::Ask => "ASK",
            EventIntent::Journal => "JOURNAL",
            EventIntent::FollowUp => "FOLLOW_UP",
            EventIntent::Mixed => "MIXED",
            EventIntent::LogOnly => "LOG_ONLY",
        }
    }

    /// Parses the stable identifier back into an `EventIntent`.
    ///
    /// # Errors
    ///
    /// Returns `None` for any string that is not one of the five stable
    /// codes; callers should surface this as `EngineError::InvalidInput`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ASK" => Some(EventIntent::Ask),
            "JOURNAL" => Some(EventIntent::Journal),
            "FOLLOW_UP" => Some(EventIntent::FollowUp),
            "MIXED" => Some(EventIntent::Mixed),
            "LOG_ONLY" => Some(EventIntent::LogOnly),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_code() {
        for intent in [
            EventIntent::Ask,
            EventIntent::Journal,
            EventIntent::FollowUp,
            EventIntent::Mixed,
            EventIntent::LogOnly,
        ] {
            assert_eq!(EventIntent::from_code(intent.code()), Some(intent));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(EventIntent::from_code("NOT_A_CODE"), None);
    }
}
