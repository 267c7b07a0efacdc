//! Tool definitions for domain listing, benefit cards, policy disclosure and follow-ups.

use serde_json::json;

use super::registry::ToolDescriptor;
use crate::support::model::Domain;

pub const EXPOSE_AVAILABLE_DOMAINS_TOOL: &str = "expose_available_domains";
pub const RANK_SUPPORT_CARDS_TOOL: &str = "rank_support_cards";
pub const REVEAL_POLICY_NAME_TOOL: &str = "reveal_policy_name_if_triggered";
pub const SUGGEST_FOLLOWUP_OPTIONS_TOOL: &str = "suggest_followup_options";

fn domain_labels() -> Vec<&'static str> {
    Domain::ALL.iter().map(|domain| domain.label()).collect()
}

pub fn expose_available_domains_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: EXPOSE_AVAILABLE_DOMAINS_TOOL.to_string(),
        description: concat!(
            "한국 공공 지원 분야 8가지를 목록으로 보여줍니다. ",
            "핵심 5개(주거·월세, 생활 유지, 의료·돌봄, 고용·교육, 심리·정서)와 ",
            "확장 3개(문화·여가, 평생교육, 참여·활동)로 나뉩니다. ",
            "[호출 시점] 사용자가 \"어떤 지원이 있어요?\"처럼 분야 전체를 물을 때, ",
            "상황 설명 없이 분야만 먼저 보고 싶어 할 때. ",
            "[호출 금지] orchestrate_full_response를 이미 호출한 경우 (분야 안내가 포함되어 있음)."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "context": {
                    "type": "string",
                    "description": "추천 분야 선택에 참고할 상황 설명 (선택)"
                }
            }
        }),
    }
}

pub fn rank_support_cards_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: RANK_SUPPORT_CARDS_TOOL.to_string(),
        description: concat!(
            "선택한 지원 분야의 혜택 카드 2개를 추천 순서대로 보여줍니다. ",
            "각 카드는 '이게 뭐냐면 / 왜 지금 맞냐면 / 이렇게 말하면 돼요 / 어디로 가면 돼요 / 막히면' 구조입니다. ",
            "[호출 시점] 사용자가 특정 분야를 명시했을 때 (예: \"주거 지원 알려줘\"), ",
            "orchestrate_full_response 이후 다른 분야의 카드를 더 보고 싶어 할 때. ",
            "[호출 금지] 분야가 불명확한 첫 상담 (orchestrate_full_response를 사용하세요). ",
            "제도명은 카드에 포함되지 않으며, reveal_policy_name_if_triggered로만 공개됩니다."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "domain": {
                    "type": "string",
                    "enum": domain_labels(),
                    "description": "지원 분야 (8개 중 하나, 비어 있으면 주거·월세)"
                }
            },
            "required": ["domain"]
        }),
    }
}

pub fn reveal_policy_name_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: REVEAL_POLICY_NAME_TOOL.to_string(),
        description: concat!(
            "사용자가 특정 카드를 선택하거나 제도명을 물었을 때만 정확한 제도명과 연락처를 공개합니다. ",
            "[트리거] 카드 선택(\"1번 할게요\", \"첫 번째 거 신청\", \"2번이 뭐예요?\"), ",
            "제도명 질문(\"제도명이 뭐예요?\", \"정확한 이름\", \"무슨 제도\"), ",
            "행동 의사(\"전화해볼게요\", \"신청하고 싶어요\", \"연락처\", \"어디로\"). ",
            "[호출 금지] 트리거가 없는 일반 상담 단계. ",
            "트리거가 감지되지 않으면 triggered=false와 함께 제도명을 공개하지 않습니다."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "사용자 메시지 (트리거 감지용)"
                },
                "domain": {
                    "type": "string",
                    "enum": domain_labels(),
                    "description": "현재 상담 중인 지원 분야 (선택)"
                },
                "card_number": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 2,
                    "description": "선택한 카드 번호 (선택)"
                }
            },
            "required": ["message"]
        }),
    }
}

pub fn suggest_followup_options_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: SUGGEST_FOLLOWUP_OPTIONS_TOOL.to_string(),
        description: concat!(
            "현재 분야와 함께 살펴보면 좋은 인접 지원 분야 3개를 이유와 함께 제안합니다. ",
            "[호출 시점] 한 분야의 안내가 끝나고 사용자가 \"다른 건 없어요?\"라고 물을 때. ",
            "[호출 금지] orchestrate_full_response를 이미 호출한 경우 (followup_options가 포함되어 있음)."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "current_domain": {
                    "type": "string",
                    "enum": domain_labels(),
                    "description": "현재 상담 중인 지원 분야 (선택)"
                }
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_cards_domain_enum() {
        let desc = rank_support_cards_descriptor();
        assert_eq!(desc.name, RANK_SUPPORT_CARDS_TOOL);
        let labels = desc.input_schema["properties"]["domain"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "주거·월세");
    }

    #[test]
    fn test_descriptors_have_schemas() {
        for desc in [
            expose_available_domains_descriptor(),
            reveal_policy_name_descriptor(),
            suggest_followup_options_descriptor(),
        ] {
            assert_eq!(desc.input_schema["type"], "object");
            assert!(!desc.description.is_empty());
        }
        assert_eq!(
            reveal_policy_name_descriptor().input_schema["required"][0],
            "message"
        );
    }
}
