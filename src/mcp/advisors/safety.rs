//! Closing safe message with crisis hotlines.

use serde::{Deserialize, Serialize};

use super::traits::{Advisor, Validator};
use super::{AdvisorError, SupportAdvisor};
use crate::support::analysis;
use crate::support::catalog;
use crate::support::model::UrgencyLevel;

/// Emotion hint and the opening line that acknowledges it.
const EMOTION_OPENINGS: &[(&str, &str)] = &[
    ("무서", "무서운 마음이 드는 건 자연스러운 일입니다."),
    ("두려", "두려운 마음이 드는 건 자연스러운 일입니다."),
    ("불안", "불안한 마음이 크시죠."),
    ("걱정", "걱정이 많으실 수 있어요."),
    ("외로", "혼자가 아니에요."),
    ("억울", "억울한 마음도 충분히 이해됩니다."),
    ("화가", "화가 나는 마음도 충분히 이해됩니다."),
];

/// Request for `compose_safe_response`.
#[derive(Debug, Deserialize, Default)]
pub struct SafeResponseRequest {
    #[serde(default)]
    pub user_emotion: Option<String>,
}

impl Validator for SafeResponseRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct SafeResponse {
    pub safe_message: String,
    pub tone: String,
    pub support_resources: Vec<String>,
}

impl Advisor<SafeResponseRequest> for SupportAdvisor {
    type Response = SafeResponse;

    fn advise(&self, request: SafeResponseRequest) -> Result<SafeResponse, AdvisorError> {
        let emotion = request.user_emotion.as_deref().unwrap_or("").trim();
        let crisis = analysis::assess_urgency(emotion) == UrgencyLevel::Critical;

        let mut parts: Vec<&str> = Vec::new();
        if let Some((_, opening)) = EMOTION_OPENINGS.iter().find(|(hint, _)| emotion.contains(hint)) {
            parts.push(*opening);
        }
        parts.push(catalog::SAFE_MESSAGE);
        if crisis {
            parts.push(catalog::CRISIS_NOTICE);
        }

        let mut support_resources: Vec<String> = Vec::new();
        if crisis {
            support_resources.extend(catalog::EMERGENCY_RESOURCES.iter().map(|r| r.to_string()));
        }
        support_resources.extend(catalog::SUPPORT_RESOURCES.iter().map(|r| r.to_string()));

        Ok(SafeResponse {
            safe_message: parts.join(" "),
            tone: catalog::SAFE_TONE.to_string(),
            support_resources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_safe_message() {
        let response = SupportAdvisor.advise(SafeResponseRequest::default()).unwrap();
        assert_eq!(response.safe_message, catalog::SAFE_MESSAGE);
        assert_eq!(response.tone, "비판단적, 지지적");
        assert_eq!(response.support_resources.len(), 3);
    }

    #[test]
    fn test_emotion_opening_is_prepended() {
        let response = SupportAdvisor
            .advise(SafeResponseRequest {
                user_emotion: Some("너무 불안해요".to_string()),
            })
            .unwrap();
        assert!(response.safe_message.starts_with("불안한 마음이 크시죠."));
    }

    #[test]
    fn test_crisis_adds_emergency_lines() {
        let response = SupportAdvisor
            .advise(SafeResponseRequest {
                user_emotion: Some("가정폭력 때문에 무서워요".to_string()),
            })
            .unwrap();
        assert!(response.safe_message.contains("112"));
        assert_eq!(response.support_resources[0], "경찰 긴급신고 112");
        assert_eq!(response.support_resources.len(), 5);
    }
}
