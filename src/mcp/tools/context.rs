//! Tool definitions for situation analysis: context summary, urgency, region.

use serde_json::json;

use super::registry::ToolDescriptor;

pub const NORMALIZE_USER_CONTEXT_TOOL: &str = "normalize_user_context";
pub const ASSESS_URGENCY_LEVEL_TOOL: &str = "assess_urgency_level";
pub const COLLECT_REGION_CONTEXT_TOOL: &str = "collect_region_context";

pub fn normalize_user_context_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: NORMALIZE_USER_CONTEXT_TOOL.to_string(),
        description: concat!(
            "한국 공공 지원 관련 사용자 발화를 구조화된 상황 정보(요약, 키워드, 부족한 정보)로 정리합니다. ",
            "[호출 시점] orchestrate_full_response 대신 상황 분석만 먼저 필요할 때, ",
            "상황 설명은 했지만 아직 지원 요청은 하지 않았을 때, ",
            "복잡한 상황을 단계적으로 분해하고 싶을 때. ",
            "예: \"30대이고 서울에 살아요. 3년째 백수고 혼자 살아요\". ",
            "[호출 금지] 이미 orchestrate_full_response를 호출한 경우, ",
            "공공 지원과 무관한 일상 대화, 단순 인사나 확인 응답."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "사용자 발화 메시지"
                }
            },
            "required": ["message"]
        }),
    }
}

pub fn assess_urgency_level_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: ASSESS_URGENCY_LEVEL_TOOL.to_string(),
        description: concat!(
            "공공 지원 상황의 긴급도(1~3)를 평가합니다. ",
            "Level 1(매우 긴급): 퇴거, 위험, 응급, 폭력 등 즉각 대응 필요. ",
            "Level 2(긴급): 이번 달, 곧, 급한 등 단기 압박. ",
            "Level 3(보통): 일반적인 지원 탐색 상황. ",
            "orchestrate_full_response가 자동으로 처리하므로 대부분의 경우 단독 호출은 불필요하며, ",
            "긴급도만 따로 판단해야 할 때에만 호출하세요."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "context": {
                    "type": "object",
                    "description": "상황 정보 객체 (normalize_user_context 결과 등)"
                }
            },
            "required": ["context"]
        }),
    }
}

pub fn collect_region_context_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: COLLECT_REGION_CONTEXT_TOOL.to_string(),
        description: concat!(
            "한국 지역(시/도, 시/군/구, 읍/면/동) 정보를 수집하여 지역별 지원 안내에 활용합니다. ",
            "[호출 시점] 사용자가 지역 정보를 명시적으로 제공했을 때 ",
            "(\"서울 강남구에 살아요\", \"천안 두정동이에요\", \"부산 사상구입니다\", \"경기도 수원시 거주 중이에요\"), ",
            "지역별 지원 차이를 확인해야 할 때. ",
            "[호출 금지] 사용자가 지역을 언급하지 않았을 때, 이미 지역 정보를 수집했을 때(중복 방지), ",
            "지역과 무관한 일반 질문."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "user_input": {
                    "type": "string",
                    "description": "지역 정보가 포함된 사용자 입력"
                }
            },
            "required": ["user_input"]
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors() {
        let normalize = normalize_user_context_descriptor();
        assert_eq!(normalize.name, NORMALIZE_USER_CONTEXT_TOOL);
        assert_eq!(normalize.input_schema["required"][0], "message");

        let urgency = assess_urgency_level_descriptor();
        assert!(urgency.description.contains("Level 1"));
        assert_eq!(urgency.input_schema["properties"]["context"]["type"], "object");

        let region = collect_region_context_descriptor();
        assert!(region.description.contains("천안 두정동"));
    }
}
