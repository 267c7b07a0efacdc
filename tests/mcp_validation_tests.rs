use korean_support_advisor::mcp::advisors::validation::{
    collect_text, validate_has_text, validate_required, ValidationError, ValidationErrors,
};
use korean_support_advisor::mcp::advisors::{
    OrchestrateRequest, RankCardsRequest, RegionRequest, UrgencyRequest, Validator,
};
use serde_json::json;

#[test]
fn test_validate_required_empty() {
    let mut errors = ValidationErrors::new();
    validate_required("   ", "user_message", "상담 메시지", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors.to_mcp_message().contains("상담 메시지"));
}

#[test]
fn test_validate_required_valid() {
    let mut errors = ValidationErrors::new();
    validate_required("월세가 밀렸어요", "user_message", "상담 메시지", &mut errors);
    assert!(errors.is_empty());
}

#[test]
fn test_validate_has_text_nested() {
    let mut errors = ValidationErrors::new();
    validate_has_text(&json!({"summary": {"text": ""}, "keywords": []}), "context", "상황 정보", &mut errors);
    assert_eq!(errors.len(), 1);

    let mut errors = ValidationErrors::new();
    validate_has_text(&json!({"keywords": ["퇴거"]}), "context", "상황 정보", &mut errors);
    assert!(errors.is_empty());
}

#[test]
fn test_collect_text_flattens_values() {
    let text = collect_text(&json!({"a": "퇴거", "b": ["이번 달", 3], "c": null}));
    assert!(text.contains("퇴거"));
    assert!(text.contains("이번 달"));
    assert!(text.contains('3'));
}

#[test]
fn test_validation_errors_message() {
    let mut errors = ValidationErrors::new();
    errors.add(ValidationError::empty_field("message", "사용자 메시지"));
    errors.add(ValidationError::new("domain", "지원 분야가 비어 있습니다").with_suggestion("주거·월세"));

    let msg = errors.to_mcp_message();
    assert!(msg.contains("2건"));
    assert!(msg.contains("사용자 메시지"));
    assert!(msg.contains("주거·월세"));
}

#[test]
fn test_request_validators() {
    assert!(OrchestrateRequest::default().validate().is_err());
    assert!(RankCardsRequest::default().validate().is_err());
    assert!(RegionRequest::default().validate().is_err());
    assert!(UrgencyRequest::default().validate().is_err());

    let request = OrchestrateRequest {
        user_message: "일자리를 찾고 있어요".to_string(),
        skip_onboarding: true,
    };
    assert!(request.validate().is_ok());
    assert!(UrgencyRequest::from_text("곧 이사해야 해요").validate().is_ok());
}
