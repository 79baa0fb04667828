//! Whether a factor reflects something chosen, suffered, or constrained.

use serde::{Deserialize, Serialize};

/// The nature of a factor: is it chosen, imposed, or chosen-under-constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorType {
    /// Freely chosen (e.g. a goal or information preference).
    Choice,
    /// Not chosen; happens to the person (e.g. a symptom).
    Chance,
    /// Chosen, but within a narrowed set of options (e.g. an access
    /// barrier that still leaves some path open).
    ConstrainedChoice,
}

impl FactorType {
    /// Stable identifier used in persistence.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            FactorType::Choice => "choice",
            FactorType::Chance => "chance",
            FactorType::ConstrainedChoice => "constrained_choice",
        }
    }
}

impl std::fmt::Display for FactorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(FactorType::Choice.code(), "choice");
        assert_eq!(FactorType::Chance.code(), "chance");
        assert_eq!(FactorType::ConstrainedChoice.code(), "constrained_choice");
    }
}
