//! Situation analysis tools: summary/keywords, urgency and region.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::traits::{Advisor, Validator};
use super::validation::{collect_text, validate_has_text, validate_required, ValidationErrors};
use super::{AdvisorError, SupportAdvisor};
use crate::support::analysis;
use crate::support::model::{RegionContext, UrgencyLevel};
use crate::support::region::extract_region;

/// Request for `normalize_user_context`.
#[derive(Debug, Deserialize, Default)]
pub struct NormalizeRequest {
    #[serde(default)]
    pub message: String,
}

impl Validator for NormalizeRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        let mut errors = ValidationErrors::new();
        validate_required(&self.message, "message", "사용자 발화", &mut errors);
        errors.into_result().map_err(AdvisorError::EmptyInput)
    }
}

#[derive(Debug, Serialize)]
pub struct NormalizedContext {
    pub summary: String,
    pub keywords: Vec<String>,
    pub missing_info: Vec<String>,
}

impl Advisor<NormalizeRequest> for SupportAdvisor {
    type Response = NormalizedContext;

    fn advise(&self, request: NormalizeRequest) -> Result<NormalizedContext, AdvisorError> {
        let message = request.message.trim();

        let mut summary = format!("'{}'로부터 추출한 상황 요약", message);
        let domains = analysis::detect_domains(message);
        if !domains.is_empty() {
            let labels: Vec<&str> = domains.iter().map(|d| d.label()).collect();
            summary.push_str(&format!(" (관련 분야: {})", labels.join(", ")));
        }

        Ok(NormalizedContext {
            summary,
            keywords: analysis::extract_keywords(message),
            missing_info: analysis::missing_info(message)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Request for `assess_urgency_level`. The context may be any JSON the
/// agent collected; every piece of text inside it is inspected.
#[derive(Debug, Deserialize, Default)]
pub struct UrgencyRequest {
    #[serde(default)]
    pub context: Value,
}

impl UrgencyRequest {
    pub fn from_text(text: &str) -> Self {
        Self {
            context: Value::String(text.to_string()),
        }
    }
}

impl Validator for UrgencyRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        let mut errors = ValidationErrors::new();
        validate_has_text(&self.context, "context", "상황 정보", &mut errors);
        errors.into_result().map_err(AdvisorError::EmptyInput)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UrgencyAssessment {
    pub urgency_level: UrgencyLevel,
    pub reason: String,
}

impl Advisor<UrgencyRequest> for SupportAdvisor {
    type Response = UrgencyAssessment;

    fn advise(&self, request: UrgencyRequest) -> Result<UrgencyAssessment, AdvisorError> {
        let level = analysis::assess_urgency(&collect_text(&request.context));
        Ok(UrgencyAssessment {
            urgency_level: level,
            reason: level.reason().to_string(),
        })
    }
}

/// Request for `collect_region_context`.
#[derive(Debug, Deserialize, Default)]
pub struct RegionRequest {
    #[serde(default)]
    pub user_input: String,
}

impl Validator for RegionRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        let mut errors = ValidationErrors::new();
        validate_required(&self.user_input, "user_input", "지역 정보", &mut errors);
        errors.into_result().map_err(AdvisorError::EmptyInput)
    }
}

#[derive(Debug, Serialize)]
pub struct RegionResponse {
    pub collected: bool,
    pub region: Option<RegionContext>,
    pub message: String,
}

impl Advisor<RegionRequest> for SupportAdvisor {
    type Response = RegionResponse;

    fn advise(&self, request: RegionRequest) -> Result<RegionResponse, AdvisorError> {
        let response = match extract_region(&request.user_input) {
            Some(region) => RegionResponse {
                collected: true,
                message: format!(
                    "{} 지역 정보가 수집되었습니다. 해당 지역의 특화 지원 프로그램을 안내해드릴 수 있습니다.",
                    region.label()
                ),
                region: Some(region),
            },
            None => RegionResponse {
                collected: false,
                region: None,
                message: "지역 정보를 찾지 못했습니다. 시/도와 시/군/구를 알려주시면 지역별 지원을 안내해드릴 수 있습니다."
                    .to_string(),
            },
        };
        Ok(response)
    }
}
