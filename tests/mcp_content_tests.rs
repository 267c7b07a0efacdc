use korean_support_advisor::mcp::content::builder::{success_payload, ContentBuilder};
use korean_support_advisor::mcp::content::types::{ContentItem, ToolResult};
use korean_support_advisor::support::model::ActionPlan;
use serde_json::json;

#[test]
fn test_builder_text() {
    let result = ContentBuilder::new().text("안녕하세요").build();

    assert!(!result.is_error);
    assert_eq!(result.content.len(), 1);
    assert_eq!(result.content[0].content_type, "text");
    assert!(result.structured_content.is_none());
}

#[test]
fn test_builder_json_sets_structured_content() {
    let result = ContentBuilder::new()
        .json(json!({"domain": "주거·월세"}))
        .build();

    assert_eq!(result.structured_content, Some(json!({"domain": "주거·월세"})));
    assert!(result.content[0].text.contains("주거·월세"));
}

#[test]
fn test_builder_error() {
    let result = ContentBuilder::new().text("문제가 발생했습니다").error().build();
    assert!(result.is_error);
}

#[test]
fn test_success_payload_serializes_struct() {
    let plan = ActionPlan {
        today: vec!["전화하기".to_string()],
        tomorrow: vec!["방문하기".to_string()],
        fallback: "129".to_string(),
    };
    let result = success_payload(&plan);

    assert!(!result.is_error);
    let structured = result.structured_content.unwrap();
    assert_eq!(structured["today"][0], "전화하기");
    assert_eq!(structured["fallback"], "129");
    // text mirrors the structured payload as pretty JSON
    let reparsed: serde_json::Value = serde_json::from_str(&result.content[0].text).unwrap();
    assert_eq!(reparsed, structured);
}

#[test]
fn test_tool_result_error() {
    let result = ToolResult::error("잘못된 요청");
    assert!(result.is_error);
    assert_eq!(result.first_text(), Some("잘못된 요청"));
}

#[test]
fn test_tool_result_wire_format() {
    let value = serde_json::to_value(success_payload(&json!({"ok": true}))).unwrap();
    assert_eq!(value["content"][0]["type"], "text");
    assert_eq!(value["structuredContent"]["ok"], true);
    assert_eq!(value["isError"], false);

    let value = serde_json::to_value(ToolResult::error("x")).unwrap();
    assert!(value.get("structuredContent").is_none());
    assert_eq!(value["isError"], true);
}

#[test]
fn test_content_item_deserializes() {
    let item: ContentItem = serde_json::from_value(json!({"type": "text", "text": "hi"})).unwrap();
    assert_eq!(item, ContentItem::text("hi"));
}
