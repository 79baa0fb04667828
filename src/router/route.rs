//! The next-step router (C7, §4.7).

use crate::enums::{FactorCode, FrictionBand, NextActionKind, NextStepCategory, RiskBand, UncertaintyBand};
use crate::model::StateSnapshot;

/// The fixed safety-net copy shown whenever a route carries one (§4.7).
pub const SAFETY_NET_COPY: &str = "If you feel unsafe or symptoms get worse, call 000 or seek urgent care.";

/// The router's decision for a turn.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedStep {
    /// The chosen next-step category.
    pub category: NextStepCategory,
    /// A short internal rationale for why this category was chosen.
    pub rationale: &'static str,
    /// The fixed safety-net copy, present for urgent/crisis routes.
    pub safety_net: Option<String>,
}

/// Routes a built [`StateSnapshot`] to a next-step category, first
/// match wins (§4.7).
#[must_use]
pub fn route(snapshot: &StateSnapshot) -> RoutedStep {
    if snapshot.used_factors().iter().any(|f| f.code() == FactorCode::SafetySelfHarm) {
        return with_safety_net(NextStepCategory::CrisisSupport, "self-harm factor present");
    }

    if snapshot.next_action_kind() == NextActionKind::SafetyEscalation || snapshot.risk_band() == RiskBand::Urgent {
        return with_safety_net(NextStepCategory::UrgentCareEd, "safety escalation or urgent risk");
    }

    if snapshot.uncertainty_band() == UncertaintyBand::High && snapshot.next_action_kind() == NextActionKind::AskFollowup
    {
        return RoutedStep {
            category: NextStepCategory::SelfCare,
            rationale: "follow-up question takes precedence",
            safety_net: None,
        };
    }

    if snapshot.risk_band() == RiskBand::High && snapshot.friction_band() == FrictionBand::High {
        return with_safety_net(NextStepCategory::UrgentCareEd, "high risk compounded by high friction");
    }

    if snapshot.risk_band() == RiskBand::High {
        return RoutedStep { category: NextStepCategory::GpTelehealth, rationale: "high risk", safety_net: None };
    }

    if snapshot.risk_band() == RiskBand::Medium && snapshot.friction_band() == FrictionBand::High {
        return RoutedStep {
            category: NextStepCategory::GpTelehealth,
            rationale: "medium risk with high friction",
            safety_net: None,
        };
    }

    if snapshot.risk_band() == RiskBand::Medium {
        return RoutedStep { category: NextStepCategory::Pharmacist, rationale: "medium risk", safety_net: None };
    }

    RoutedStep { category: NextStepCategory::SelfCare, rationale: "no elevated signal", safety_net: None }
}

fn with_safety_net(category: NextStepCategory, rationale: &'static str) -> RoutedStep {
    RoutedStep { category, rationale, safety_net: Some(SAFETY_NET_COPY.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{EventIntent, UncertaintyBand};
    use crate::model::UsedFactor;
    use crate::types::{EventId, Timestamp};

    fn snapshot(
        risk: RiskBand,
        friction: FrictionBand,
        uncertainty: UncertaintyBand,
        next_action_kind: NextActionKind,
        used_factors: Vec<UsedFactor>,
    ) -> StateSnapshot {
        StateSnapshot::new(
            EventId::generate(),
            Timestamp::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            EventIntent::Ask,
            risk,
            friction,
            uncertainty,
            next_action_kind,
            vec!["bullet".to_string()],
            None,
            None,
            used_factors,
        )
    }

    #[test]
    fn self_harm_routes_to_crisis_support() {
        let used = vec![UsedFactor::new(
            FactorCode::SafetySelfHarm,
            crate::enums::ComplexityDomain::SafetyRisk,
            0.95,
        )];
        let routed = route(&snapshot(
            RiskBand::Urgent,
            FrictionBand::Low,
            UncertaintyBand::Low,
            NextActionKind::SafetyEscalation,
            used,
        ));
        assert_eq!(routed.category, NextStepCategory::CrisisSupport);
        assert!(routed.safety_net.is_some());
    }

    #[test]
    fn urgent_risk_routes_to_urgent_care() {
        let routed = route(&snapshot(
            RiskBand::Urgent,
            FrictionBand::Low,
            UncertaintyBand::Low,
            NextActionKind::SafetyEscalation,
            Vec::new(),
        ));
        assert_eq!(routed.category, NextStepCategory::UrgentCareEd);
    }

    #[test]
    fn high_uncertainty_with_followup_routes_self_care() {
        let routed = route(&snapshot(
            RiskBand::Low,
            FrictionBand::Low,
            UncertaintyBand::High,
            NextActionKind::AskFollowup,
            Vec::new(),
        ));
        assert_eq!(routed.category, NextStepCategory::SelfCare);
        assert!(routed.safety_net.is_none());
    }

    #[test]
    fn high_risk_and_high_friction_routes_urgent_care() {
        let routed = route(&snapshot(
            RiskBand::High,
            FrictionBand::High,
            UncertaintyBand::Low,
            NextActionKind::Answer,
            Vec::new(),
        ));
        assert_eq!(routed.category, NextStepCategory::UrgentCareEd);
    }

    #[test]
    fn high_risk_alone_routes_gp_telehealth() {
        let routed = route(&snapshot(
            RiskBand::High,
            FrictionBand::Low,
            UncertaintyBand::Low,
            NextActionKind::Answer,
            Vec::new(),
        ));
        assert_eq!(routed.category, NextStepCategory::GpTelehealth);
    }

    #[test]
    fn medium_risk_alone_routes_pharmacist() {
        let routed = route(&snapshot(
            RiskBand::Medium,
            FrictionBand::Low,
            UncertaintyBand::Low,
            NextActionKind::Answer,
            Vec::new(),
        ));
        assert_eq!(routed.category, NextStepCategory::Pharmacist);
    }

    #[test]
    fn default_routes_self_care() {
        let routed = route(&snapshot(
            RiskBand::Low,
            FrictionBand::Low,
            UncertaintyBand::Low,
            NextActionKind::Answer,
            Vec::new(),
        ));
        assert_eq!(routed.category, NextStepCategory::SelfCare);
    }
}
