//! The presentation mode chosen for a response (§4.9).

use serde::{Deserialize, Serialize};

/// The mode the response model is assembled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseMode {
    /// A normal answer: what matters + next step.
    Answer,
    /// A follow-up question is pending; next step is withheld.
    AskFollowup,
    /// The turn was log-only; acknowledged with no further flow.
    LogOnly,
    /// Safety-critical; urgent-care guidance takes over the response.
    SafetyEscalation,
}

impl ResponseMode {
    /// Stable identifier used in persistence and debug output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            ResponseMode::Answer => "answer",
            ResponseMode::AskFollowup => "ask_followup",
            ResponseMode::LogOnly => "log_only",
            ResponseMode::SafetyEscalation => "safety_escalation",
        }
    }
}

impl std::fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
