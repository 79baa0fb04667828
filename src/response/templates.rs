//! Fixed response copy: mode titles and the next-step template table
//! (§4.9, §6). Every string here is part of the wire/UI contract.

use crate::enums::{NextStepCategory, ResponseMode};

/// Title shown for the "Saved" (log-only) mode.
pub const TITLE_LOG_ONLY: &str = "Saved";
/// Title shown when a follow-up question is pending.
pub const TITLE_ASK_FOLLOWUP: &str = "One quick question";
/// Title shown when a safety escalation is in effect.
pub const TITLE_SAFETY_ESCALATION: &str = "It may be safer to get help now";
/// Title shown for a normal answer.
pub const TITLE_ANSWER: &str = "Here's what matters";

/// Returns the fixed title for a response mode (§4.9).
#[must_use]
pub const fn title_for(mode: ResponseMode) -> &'static str {
    match mode {
        ResponseMode::LogOnly => TITLE_LOG_ONLY,
        ResponseMode::AskFollowup => TITLE_ASK_FOLLOWUP,
        ResponseMode::SafetyEscalation => TITLE_SAFETY_ESCALATION,
        ResponseMode::Answer => TITLE_ANSWER,
    }
}

/// The fixed heading used on every next-step card.
pub const NEXT_STEP_HEADING: &str = "Next step";

/// The canonical copy for one next-step category (§4.9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextStepTemplate {
    /// The short explanatory line shown above the options.
    pub text: &'static str,
    /// At least two concrete options the user can act on.
    pub options: &'static [&'static str],
}

/// Looks up the fixed template for `category` (§4.9).
#[must_use]
pub const fn next_step_template(category: NextStepCategory) -> NextStepTemplate {
    match category {
        NextStepCategory::SelfCare => NextStepTemplate {
            text: "Self-care looks like a reasonable place to start.",
            options: &[
                "Rest and keep an eye on how you feel",
                "Use over-the-counter remedies if that fits",
                "Check back in if anything changes",
            ],
        },
        NextStepCategory::Pharmacist => NextStepTemplate {
            text: "A pharmacist can help you sort out next steps quickly.",
            options: &[
                "Visit a pharmacist for advice",
                "Ask about over-the-counter options",
                "Ask whether you should see a GP instead",
            ],
        },
        NextStepCategory::GpTelehealth => NextStepTemplate {
            text: "It's worth getting a GP's opinion on this.",
            options: &[
                "Book a GP or telehealth appointment",
                "Call your GP clinic to ask how soon you should be seen",
                "Use telehealth if an in-person visit is hard to arrange",
            ],
        },
        NextStepCategory::UrgentCareEd => NextStepTemplate {
            text: "This may need attention sooner rather than later.",
            options: &[
                "Go to an urgent care clinic or emergency department",
                "Call 000 if things get worse",
                "Ask someone to go with you if you can",
            ],
        },
        NextStepCategory::CrisisSupport => NextStepTemplate {
            text: "Please reach out to a crisis support service now.",
            options: &[
                "Call Lifeline on 13 11 14",
                "Call 000 if you are in immediate danger",
                "Reach out to someone you trust right now",
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_at_least_two_options() {
        for category in [
            NextStepCategory::SelfCare,
            NextStepCategory::Pharmacist,
            NextStepCategory::GpTelehealth,
            NextStepCategory::UrgentCareEd,
            NextStepCategory::CrisisSupport,
        ] {
            assert!(next_step_template(category).options.len() >= 2);
        }
    }

    #[test]
    fn titles_are_stable() {
        assert_eq!(title_for(ResponseMode::LogOnly), "Saved");
        assert_eq!(title_for(ResponseMode::AskFollowup), "One quick question");
        assert_eq!(title_for(ResponseMode::SafetyEscalation), "It may be safer to get help now");
        assert_eq!(title_for(ResponseMode::Answer), "Here's what matters");
    }
}
