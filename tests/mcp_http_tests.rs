//! Integration tests for the stateless MCP HTTP endpoint.

mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use korean_support_advisor::{app_state, configure};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(app_state(&common::test_config(false)))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_rpc_endpoint_initialize() {
    let app = init_app!();

    let payload = common::rpc(
        1,
        "initialize",
        json!({
            "protocolVersion": "2025-03-26",
            "clientInfo": { "name": "test-client", "version": "1.0.0" }
        }),
    );
    let req = test::TestRequest::post().uri("/mcp").set_json(&payload).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["result"]["protocolVersion"], "2025-03-26");
    assert!(body["result"]["serverInfo"].is_object());
}

#[actix_web::test]
async fn test_sse_alias_lists_tools() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/sse")
        .set_json(common::rpc(2, "tools/list", json!({})))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 11);
}

#[actix_web::test]
async fn test_rpc_tool_call_orchestrate() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/mcp")
        .set_json(common::rpc(
            3,
            "tools/call",
            json!({
                "name": "orchestrate_full_response",
                "arguments": {"user_message": "천안 두정동인데 월세가 밀렸어요"}
            }),
        ))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let payload = &body["result"]["structuredContent"];
    assert_eq!(payload["domains"][0], "주거·월세");
    assert_eq!(payload["urgency"]["urgency_level"], 2);
    assert_eq!(payload["region"]["city"], "천안시");
}

#[actix_web::test]
async fn test_notification_returns_accepted() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/mcp")
        .set_json(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[actix_web::test]
async fn test_request_without_id_returns_accepted() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/mcp")
        .set_json(json!({"jsonrpc": "2.0", "method": "tools/list"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[actix_web::test]
async fn test_malformed_json_is_parse_error() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/mcp")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"jsonrpc\": \"2.0\", ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], -32700);
    assert!(body["id"].is_null());
}

#[actix_web::test]
async fn test_missing_method_is_invalid_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/mcp")
        .set_json(json!({"jsonrpc": "2.0", "id": 4}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], -32600);
}

#[actix_web::test]
async fn test_get_on_mcp_is_not_allowed() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/mcp").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}
