//! `ResponseModel` assembly (§4.9).

use crate::controls::ControlsSnapshot;
use crate::enums::{NextActionKind, NextStepCategory, ResponseMode};
use crate::model::StateSnapshot;
use crate::response::chips::{format_used_factors_for_ui, Chip};
use crate::response::templates::{next_step_template, title_for, NEXT_STEP_HEADING};
use crate::router::RoutedStep;

/// A next-step card, omitted entirely in `log_only` and `ask_followup`
/// modes (§4.9).
#[derive(Debug, Clone, PartialEq)]
pub struct NextStep {
    /// The routed category this card describes.
    pub category: NextStepCategory,
    /// The fixed heading (`"Next step"`).
    pub heading: &'static str,
    /// The category's canonical explanatory line.
    pub text: &'static str,
    /// At least two concrete options.
    pub options: Vec<String>,
}

/// The explainability payload: chips plus the two control toggles
/// (§4.9, §4.10).
#[derive(Debug, Clone, PartialEq)]
pub struct WhatImUsing {
    /// Up to 6 sorted, deduplicated explainability chips.
    pub chips: Vec<Chip>,
    /// The two control toggles as they stood for this turn.
    pub controls: ControlsSnapshot,
}

/// The assembled user-facing response for a turn (§4.9).
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseModel {
    /// The presentation mode.
    pub mode: ResponseMode,
    /// The mode-specific fixed title.
    pub title: &'static str,
    /// Pass-through of the snapshot's "what matters" bullets.
    pub what_matters: Vec<String>,
    /// The pending question text, present only in `ask_followup` mode.
    pub followup_question: Option<String>,
    /// The next-step card, omitted in `log_only` and `ask_followup`.
    pub next_step: Option<NextStep>,
    /// The safety-net copy, present in `safety_escalation` and
    /// sometimes in `answer`.
    pub safety_net: Option<String>,
    /// The explainability payload.
    pub what_im_using: WhatImUsing,
}

/// Determines the response mode from the built snapshot and routed
/// step (§4.9).
#[must_use]
pub fn mode_for(snapshot: &StateSnapshot, routed: &RoutedStep) -> ResponseMode {
    if snapshot.next_action_kind() == NextActionKind::LogOnly {
        ResponseMode::LogOnly
    } else if snapshot.next_action_kind() == NextActionKind::AskFollowup {
        ResponseMode::AskFollowup
    } else if snapshot.next_action_kind() == NextActionKind::SafetyEscalation
        || matches!(routed.category, NextStepCategory::UrgentCareEd | NextStepCategory::CrisisSupport)
    {
        ResponseMode::SafetyEscalation
    } else {
        ResponseMode::Answer
    }
}

/// Assembles the full [`ResponseModel`] for a turn (§4.9).
#[must_use]
pub fn build_response_model(snapshot: &StateSnapshot, routed: &RoutedStep, controls: ControlsSnapshot) -> ResponseModel {
    let mode = mode_for(snapshot, routed);

    let next_step = match mode {
        ResponseMode::LogOnly | ResponseMode::AskFollowup => None,
        ResponseMode::Answer | ResponseMode::SafetyEscalation => {
            let template = next_step_template(routed.category);
            Some(NextStep {
                category: routed.category,
                heading: NEXT_STEP_HEADING,
                text: template.text,
                options: template.options.iter().map(|s| (*s).to_string()).collect(),
            })
        }
    };

    let safety_net = match mode {
        ResponseMode::SafetyEscalation => {
            routed.safety_net.clone().or_else(|| snapshot.safety_copy().map(str::to_string))
        }
        ResponseMode::Answer => routed.safety_net.clone(),
        ResponseMode::LogOnly | ResponseMode::AskFollowup => None,
    };

    let followup_question =
        if mode == ResponseMode::AskFollowup { snapshot.followup_question().map(str::to_string) } else { None };

    ResponseModel {
        mode,
        title: title_for(mode),
        what_matters: snapshot.what_matters().to_vec(),
        followup_question,
        next_step,
        safety_net,
        what_im_using: WhatImUsing { chips: format_used_factors_for_ui(snapshot.used_factors()), controls },
    }
}
