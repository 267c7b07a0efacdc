//! The one-call consultation: summary → domains → cards → action steps →
//! policy name (when triggered) → follow-ups → safe message.

use serde::{Deserialize, Serialize};

use super::cards::{PolicyReveal, RevealPolicyRequest};
use super::context::{UrgencyAssessment, UrgencyRequest};
use super::plan::ActionStepsRequest;
use super::safety::SafeResponseRequest;
use super::traits::{Advisor, Validator};
use super::validation::{validate_required, ValidationErrors};
use super::{AdvisorError, SupportAdvisor};
use crate::support::analysis::{self, DEFAULT_DOMAINS};
use crate::support::catalog;
use crate::support::model::{ActionPlan, Domain, RegionContext, SupportCard};
use crate::support::region::extract_region;

const MAX_CARDS: usize = 3;
const MAX_FOLLOWUPS: usize = 2;

const ONBOARDING_MESSAGE: &str = "상황을 편하게 말씀해 주시면 상황 요약, 분야 안내, 혜택 카드, 오늘 할 일 순서로 안내해 드릴게요. 말씀하신 내용은 저장되지 않습니다.";

/// Request for `orchestrate_full_response`.
#[derive(Debug, Deserialize, Default)]
pub struct OrchestrateRequest {
    #[serde(default)]
    pub user_message: String,
    #[serde(default)]
    pub skip_onboarding: bool,
}

impl Validator for OrchestrateRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        let mut errors = ValidationErrors::new();
        validate_required(&self.user_message, "user_message", "상담 메시지", &mut errors);
        errors.into_result().map_err(AdvisorError::EmptyInput)
    }
}

#[derive(Debug, Serialize)]
pub struct OrchestratedResponse {
    pub summary: String,
    pub domains: Vec<Domain>,
    pub cards: Vec<SupportCard>,
    pub action_steps: ActionPlan,
    pub safe_message: String,
    pub followup_options: Vec<Domain>,
    pub urgency: UrgencyAssessment,
    pub region: Option<RegionContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyReveal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding: Option<String>,
}

impl Advisor<OrchestrateRequest> for SupportAdvisor {
    type Response = OrchestratedResponse;

    fn advise(&self, request: OrchestrateRequest) -> Result<OrchestratedResponse, AdvisorError> {
        let message = request.user_message.trim();

        let detected = analysis::detect_domains(message);
        let domains = if detected.is_empty() {
            DEFAULT_DOMAINS.to_vec()
        } else {
            detected
        };
        let primary = domains[0];

        let cards = domains
            .iter()
            .take(MAX_CARDS)
            .map(|domain| catalog::support_card(*domain, 1))
            .collect();

        let followup_options = catalog::adjacent_domains(Some(primary))
            .into_iter()
            .filter(|domain| !domains.contains(domain))
            .take(MAX_FOLLOWUPS)
            .collect();

        let urgency = self.advise(UrgencyRequest::from_text(message))?;
        let action_steps = self.advise(ActionStepsRequest::default())?;
        let safe = self.advise(SafeResponseRequest {
            user_emotion: Some(message.to_string()),
        })?;
        let policy = self.advise(RevealPolicyRequest {
            message: message.to_string(),
            domain: Some(primary.label().to_string()),
            card_number: None,
        })?;

        log::debug!(
            "orchestrated response: domains={:?} urgency={:?} policy_triggered={}",
            domains,
            urgency.urgency_level,
            policy.triggered
        );

        Ok(OrchestratedResponse {
            summary: format!("'{}'에 대한 상황 분석 완료", message),
            domains,
            cards,
            action_steps,
            safe_message: safe.safe_message,
            followup_options,
            urgency,
            region: extract_region(message),
            policy: policy.triggered.then_some(policy),
            onboarding: (!request.skip_onboarding).then(|| ONBOARDING_MESSAGE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::model::UrgencyLevel;

    fn orchestrate(message: &str) -> OrchestratedResponse {
        SupportAdvisor
            .advise(OrchestrateRequest {
                user_message: message.to_string(),
                skip_onboarding: false,
            })
            .unwrap()
    }

    #[test]
    fn test_default_shape_for_empty_message() {
        let response = orchestrate("");
        assert_eq!(response.domains, vec![Domain::Housing, Domain::Livelihood]);
        assert_eq!(response.cards.len(), 2);
        assert_eq!(
            response.followup_options,
            vec![Domain::MedicalCare, Domain::Emotional]
        );
        assert!(response.policy.is_none());
        assert!(response.onboarding.is_some());
    }

    #[test]
    fn test_cards_capped_at_three() {
        let response =
            orchestrate("월세도 밀리고 생활비도 없고 병원도 가야 하고 취업도 안 돼요");
        assert_eq!(response.domains.len(), 4);
        assert_eq!(response.cards.len(), 3);
        assert_eq!(response.cards[0].title, "주거·월세 혜택 카드 1");
    }

    #[test]
    fn test_crisis_message_is_urgent_and_safe() {
        let response = orchestrate("가정폭력 때문에 집을 나왔어요. 너무 무서워요");
        assert_eq!(response.urgency.urgency_level, UrgencyLevel::Critical);
        assert!(response.safe_message.contains("112"));
    }

    #[test]
    fn test_trigger_includes_policy_and_region() {
        let response = orchestrate("천안 두정동 사는데 월세 지원 신청하고 싶어요");
        let policy = response.policy.expect("policy should be disclosed");
        assert_eq!(policy.policy_name.as_deref(), Some("청년 월세 한시 특별지원"));
        assert_eq!(
            response.region.and_then(|r| r.city),
            Some("천안시".to_string())
        );
    }

    #[test]
    fn test_skip_onboarding() {
        let response = SupportAdvisor
            .advise(OrchestrateRequest {
                user_message: "월세".to_string(),
                skip_onboarding: true,
            })
            .unwrap();
        assert!(response.onboarding.is_none());
    }
}
