//! Domain listing, ranked cards, policy disclosure and follow-up suggestions.

use serde::{Deserialize, Serialize};

use super::traits::{Advisor, Validator};
use super::validation::{validate_required, ValidationErrors};
use super::{parse_optional_domain, AdvisorError, SupportAdvisor};
use crate::support::analysis::{self, TriggerKind};
use crate::support::catalog;
use crate::support::model::{Domain, SupportCard};

/// Request for `expose_available_domains`. The optional context only
/// steers `smart_suggestion`.
#[derive(Debug, Deserialize, Default)]
pub struct DomainsRequest {
    #[serde(default)]
    pub context: Option<String>,
}

impl Validator for DomainsRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct AvailableDomains {
    pub domains: Vec<Domain>,
    pub core_domains: Vec<Domain>,
    pub extended_domains: Vec<Domain>,
    pub smart_suggestion: Domain,
}

impl Advisor<DomainsRequest> for SupportAdvisor {
    type Response = AvailableDomains;

    fn advise(&self, request: DomainsRequest) -> Result<AvailableDomains, AdvisorError> {
        let smart_suggestion = request
            .context
            .as_deref()
            .and_then(|text| analysis::detect_domains(text).into_iter().next())
            .unwrap_or(Domain::Housing);

        Ok(AvailableDomains {
            domains: Domain::ALL.to_vec(),
            core_domains: Domain::core(),
            extended_domains: Domain::extended(),
            smart_suggestion,
        })
    }
}

/// Request for `rank_support_cards`.
#[derive(Debug, Deserialize, Default)]
pub struct RankCardsRequest {
    #[serde(default)]
    pub domain: String,
}

impl Validator for RankCardsRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        let mut errors = ValidationErrors::new();
        validate_required(&self.domain, "domain", "지원 분야", &mut errors);
        errors.into_result().map_err(AdvisorError::EmptyInput)
    }
}

#[derive(Debug, Serialize)]
pub struct RankedCards {
    pub domain: Domain,
    pub cards: Vec<SupportCard>,
}

impl Advisor<RankCardsRequest> for SupportAdvisor {
    type Response = RankedCards;

    fn advise(&self, request: RankCardsRequest) -> Result<RankedCards, AdvisorError> {
        let domain = parse_optional_domain(Some(request.domain.as_str()))?.unwrap_or(Domain::Housing);
        Ok(RankedCards {
            domain,
            cards: catalog::support_cards(domain),
        })
    }
}

/// Request for `reveal_policy_name_if_triggered`.
///
/// `domain` and `card_number` let the agent say which card it showed; an
/// explicit `card_number` counts as a selection on its own.
#[derive(Debug, Deserialize, Default)]
pub struct RevealPolicyRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub card_number: Option<u8>,
}

impl Validator for RevealPolicyRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        let mut errors = ValidationErrors::new();
        validate_required(&self.message, "message", "사용자 메시지", &mut errors);
        errors.into_result().map_err(AdvisorError::EmptyInput)
    }
}

const NOT_YET_MESSAGE: &str = "아직 제도명을 공개할 단계가 아닙니다. 혜택 카드 중 하나를 선택하시거나 신청 방법을 물어보시면 정확한 제도명을 알려드릴게요.";

#[derive(Debug, Clone, Serialize)]
pub struct PolicyReveal {
    pub triggered: bool,
    pub trigger: Option<TriggerKind>,
    pub policy_name: Option<String>,
    pub contact: Option<String>,
    pub website: Option<String>,
    pub message: String,
}

impl PolicyReveal {
    fn withheld(message: impl Into<String>) -> Self {
        Self {
            triggered: false,
            trigger: None,
            policy_name: None,
            contact: None,
            website: None,
            message: message.into(),
        }
    }
}

impl Advisor<RevealPolicyRequest> for SupportAdvisor {
    type Response = PolicyReveal;

    fn advise(&self, request: RevealPolicyRequest) -> Result<PolicyReveal, AdvisorError> {
        let domain = parse_optional_domain(request.domain.as_deref())?.unwrap_or(Domain::Housing);

        let (kind, selected) = match request.card_number {
            Some(number) => (TriggerKind::CardSelection, Some(number)),
            None => match analysis::detect_trigger(&request.message) {
                Some(trigger) => (trigger.kind, trigger.card_number),
                None => return Ok(PolicyReveal::withheld(NOT_YET_MESSAGE)),
            },
        };

        let card_number = selected.unwrap_or(1);
        let Some(policy) = catalog::policy_for(domain, card_number) else {
            log::debug!("card {} selected but only {} shown", card_number, catalog::CARDS_PER_DOMAIN);
            return Ok(PolicyReveal::withheld(format!(
                "{}번 카드는 안내드리지 않았어요. 1번부터 {}번 카드 중에서 골라주시면 정확한 제도명을 알려드릴게요.",
                card_number,
                catalog::CARDS_PER_DOMAIN
            )));
        };

        let lead = match selected {
            Some(_) => "선택하신 제도는",
            None => "안내드린 첫 번째 제도는",
        };
        let message = format!(
            "{} '{}'입니다. {}로 문의하시거나 {}에서 신청 가능합니다.",
            lead, policy.policy_name, policy.contact, policy.website
        );

        Ok(PolicyReveal {
            triggered: true,
            trigger: Some(kind),
            policy_name: Some(policy.policy_name),
            contact: Some(policy.contact),
            website: Some(policy.website),
            message,
        })
    }
}

/// Request for `suggest_followup_options`.
#[derive(Debug, Deserialize, Default)]
pub struct FollowupRequest {
    #[serde(default)]
    pub current_domain: Option<String>,
}

impl Validator for FollowupRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct FollowupDomain {
    pub domain: Domain,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct FollowupOptions {
    pub followup_domains: Vec<FollowupDomain>,
    pub message: String,
}

impl Advisor<FollowupRequest> for SupportAdvisor {
    type Response = FollowupOptions;

    fn advise(&self, request: FollowupRequest) -> Result<FollowupOptions, AdvisorError> {
        let current = parse_optional_domain(request.current_domain.as_deref())?;

        let followup_domains = catalog::adjacent_domains(current)
            .into_iter()
            .map(|domain| FollowupDomain {
                domain,
                reason: catalog::followup_reason(domain).to_string(),
            })
            .collect();

        Ok(FollowupOptions {
            followup_domains,
            message: catalog::FOLLOWUP_MESSAGE.to_string(),
        })
    }
}
