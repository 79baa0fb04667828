//! What the engine wants the caller to do next with the current turn.

use serde::{Deserialize, Serialize};

/// The action kind chosen by the state snapshot builder (§4.6 step 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NextActionKind {
    /// Present the assembled response as a normal answer.
    Answer,
    /// Ask the pending follow-up question before answering.
    AskFollowup,
    /// The turn was log-only; no response flow beyond acknowledgement.
    LogOnly,
    /// Safety-critical: route straight to urgent care guidance.
    SafetyEscalation,
}

impl NextActionKind {
    /// Stable identifier used in persistence and debug output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            NextActionKind::Answer => "answer",
            NextActionKind::AskFollowup => "ask_followup",
            NextActionKind::LogOnly => "log_only",
            NextActionKind::SafetyEscalation => "safety_escalation",
        }
    }
}

impl std::fmt::Display for NextActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(NextActionKind::Answer.code(), "answer");
        assert_eq!(NextActionKind::SafetyEscalation.code(), "safety_escalation");
    }
}
