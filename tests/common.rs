#![allow(dead_code)]

use korean_support_advisor::config::AdvisorConfig;
use korean_support_advisor::mcp::content::ToolResult;
use korean_support_advisor::mcp::tools::ToolRegistry;
use serde_json::{json, Value};

/// Config with defaults only, independent of the caller's environment.
pub fn test_config(strict_input: bool) -> AdvisorConfig {
    AdvisorConfig {
        strict_input,
        ..AdvisorConfig::default()
    }
}

/// Call a tool on a default registry and return the raw result.
pub fn call(name: &str, arguments: Value) -> ToolResult {
    ToolRegistry::default().call_tool(name, Some(arguments))
}

/// Call a tool that must succeed and return its structured payload.
pub fn call_ok(name: &str, arguments: Value) -> Value {
    let result = call(name, arguments);
    assert!(
        !result.is_error,
        "{} returned an error: {:?}",
        name,
        result.first_text()
    );
    result
        .structured_content
        .expect("successful tool results carry structured content")
}

pub fn rpc(id: i64, method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    })
}
