//! Tool definition for the main consultation entry point.

use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "orchestrate_full_response";

/// Get the tool descriptor for MCP tools/list.
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "한국 공공 지원 상담의 메인 진입 도구입니다. ",
            "사용자가 상황을 설명하거나 지원을 요청할 때 가장 먼저 호출하세요. ",
            "[호출 필수] (1) 처음 상담을 시작할 때 (상황 설명, 지원 요청 등), ",
            "(2) 분야가 불명확하거나 여러 분야가 섞여 있을 때, ",
            "(3) 위기 상황(성폭행, 가정폭력 등)을 포함한 모든 상황. ",
            "[호출 금지] 특정 분야가 명시된 경우에는 rank_support_cards를 사용하세요. ",
            "한 번의 호출로 ① 상황 요약 → ② 분야 안내 → ③ 혜택 카드 1-3개 → ④ 행동 단계 → ",
            "⑤ 제도명(트리거 시) → ⑥ 확장 가능성 → ⑦ 감정 안전 메시지를 제공하므로 ",
            "이 도구를 호출한 뒤에는 normalize_user_context, expose_available_domains, ",
            "generate_action_steps, compose_safe_response를 따로 호출하지 마세요."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "user_message": {
                "type": "string",
                "description": "사용자의 상담 메시지 (원문 그대로)"
            },
            "skip_onboarding": {
                "type": "boolean",
                "description": "온보딩 안내 생략 여부 (기본값: false)",
                "default": false
            }
        },
        "required": ["user_message"]
    })
}
