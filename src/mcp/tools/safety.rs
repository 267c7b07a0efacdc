use serde_json::json;

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "compose_safe_response";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "비판단적이고 지지적인 마무리 메시지와 상담 전화(129, 109, 1577-0199)를 제공합니다. ",
            "위기 상황이 감지되면 112/119 긴급 연락처를 먼저 안내합니다. ",
            "[호출 시점] 사용자가 불안, 두려움, 걱정 등 감정을 드러낼 때, 상담을 마무리할 때. ",
            "[호출 금지] orchestrate_full_response를 이미 호출한 경우 (safe_message가 포함되어 있음)."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "user_emotion": {
                    "type": "string",
                    "description": "사용자가 표현한 감정 또는 메시지 (선택)"
                }
            }
        }),
    }
}
