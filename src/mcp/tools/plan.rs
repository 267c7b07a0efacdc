//! Tool definitions for action plans and fallback paths.

use serde_json::json;

use super::registry::ToolDescriptor;

pub const GENERATE_ACTION_STEPS_TOOL: &str = "generate_action_steps";
pub const GENERATE_FALLBACK_PATHS_TOOL: &str = "generate_fallback_paths";

pub fn generate_action_steps_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GENERATE_ACTION_STEPS_TOOL.to_string(),
        description: concat!(
            "선택한 혜택 카드에 대해 오늘 할 일, 내일 할 일, 막혔을 때 대안을 정리합니다. ",
            "[호출 시점] 사용자가 카드를 고른 뒤 \"그럼 뭐부터 해요?\"라고 물을 때. ",
            "[호출 금지] orchestrate_full_response를 이미 호출한 경우 (action_steps가 포함되어 있음)."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "selected_card": {
                    "type": "string",
                    "description": "선택한 카드 제목 (선택)"
                }
            }
        }),
    }
}

pub fn generate_fallback_paths_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GENERATE_FALLBACK_PATHS_TOOL.to_string(),
        description: concat!(
            "지원 신청 과정에서 막혔을 때의 대안 경로를 제공합니다. ",
            "전화 연결, 서류 준비, 자격 조건 세 가지 유형별로 대안을 안내합니다. ",
            "[호출 시점] \"전화가 안 돼요\", \"서류가 없어요\", \"자격이 안 된대요\"처럼 진행이 막혔을 때. ",
            "[호출 금지] 아직 지원을 선택하지 않은 초기 상담 단계."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "issue_type": {
                    "type": "string",
                    "description": "막힌 유형: phone, document, eligibility 또는 한국어 설명 (선택)"
                }
            }
        }),
    }
}
