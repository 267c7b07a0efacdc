//! MCP Service - Core JSON-RPC 2.0 request handler.

use crate::mcp::rpc::{OutboundResponse, RpcRequest, RESOURCE_NOT_FOUND};
use crate::mcp::tools::{ToolDescriptor, ToolRegistry};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Newest first; the first entry is offered when the client asks for an unknown version.
pub const SUPPORTED_PROTOCOL_VERSIONS: [&str; 3] = ["2025-06-18", "2025-03-26", "2024-11-05"];
pub const PROTOCOL_VERSION: &str = SUPPORTED_PROTOCOL_VERSIONS[0];

pub const SERVER_TITLE: &str = "한국 공공 지원 상담 MCP 서버";

pub const SERVER_INSTRUCTIONS: &str = concat!(
    "한국 공공 지원(주거, 생활, 의료, 고용, 심리 등)을 안내하는 상담 도구 모음입니다. ",
    "1) 사용자가 상황을 처음 설명하면 orchestrate_full_response를 한 번 호출하세요. ",
    "이 결과에 요약, 분야, 카드, 행동 단계, 안전 메시지가 모두 들어 있으므로 ",
    "normalize_user_context, expose_available_domains, generate_action_steps, compose_safe_response를 ",
    "이어서 따로 호출하지 마세요. ",
    "2) 사용자가 특정 분야를 명시하면 rank_support_cards를 호출하세요. ",
    "3) 카드 선택, 제도명 질문, 전화·신청 의사가 있을 때만 reveal_policy_name_if_triggered를 호출하세요. ",
    "4) 지역을 말하면 collect_region_context를 한 번만 호출하세요. ",
    "5) 진행이 막히면 generate_fallback_paths, 다른 분야가 궁금하면 suggest_followup_options를 호출하세요. ",
    "서버는 대화 상태를 저장하지 않습니다."
);

/// Pick the protocol version to answer with.
pub fn negotiate_protocol_version(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|version| {
            SUPPORTED_PROTOCOL_VERSIONS
                .iter()
                .copied()
                .find(|supported| *supported == version)
        })
        .unwrap_or(PROTOCOL_VERSION)
}

/// Core MCP request handler.
#[derive(Clone)]
pub struct McpService {
    registry: Arc<ToolRegistry>,
}

impl McpService {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one JSON-RPC message. Notifications (no `id`) never get a response.
    pub fn handle_request(&self, request: RpcRequest) -> Option<OutboundResponse> {
        if request.id.is_none() {
            info!("received client notification: {}", request.method);
            return None;
        }

        if request.jsonrpc != "2.0" {
            warn!("received unsupported jsonrpc version: {}", request.jsonrpc);
            return Some(OutboundResponse::invalid_request(
                request.id.clone(),
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }

        let RpcRequest {
            method, params, id, ..
        } = request;

        match method.as_str() {
            "initialize" => Some(self.handle_initialize(id, params)),
            "tools/list" => Some(self.handle_list_tools(id)),
            "tools/call" => Some(self.handle_call_tool(id, params)),
            "resources/list" => Some(self.handle_resources_list(id)),
            "resources/read" => Some(self.handle_resources_read(id, params)),
            "resources/templates/list" => Some(self.handle_resource_templates_list(id)),
            "prompts/list" => Some(self.handle_prompts_list(id)),
            "prompts/get" => Some(self.handle_prompts_get(id, params)),
            "ping" => Some(OutboundResponse::success(id, json!({}))),
            method if method.starts_with("notifications/") => {
                warn!("notification sent with an id: {}", method);
                None
            }
            other => Some(OutboundResponse::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: InitializeParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        let client = parsed.client_info.unwrap_or_default();
        info!(
            "client requested initialization: {} v{} (protocol {})",
            client.name.as_deref().unwrap_or("unknown"),
            client.version.as_deref().unwrap_or("unknown"),
            parsed.protocol_version.as_deref().unwrap_or("unspecified")
        );

        let result = InitializeResult {
            protocol_version: negotiate_protocol_version(parsed.protocol_version.as_deref())
                .to_string(),
            server_info: ImplementationInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some(SERVER_TITLE.to_string()),
            },
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            instructions: SERVER_INSTRUCTIONS.to_string(),
        };

        respond(id, &result)
    }

    fn handle_list_tools(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
        };

        respond(id, &payload)
    }

    fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: CallToolParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        info!("calling tool: {}", parsed.name);
        let result = self.registry.call_tool(&parsed.name, parsed.arguments);
        respond(id, &result)
    }

    fn handle_resources_list(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ListResourcesResult {
            resources: Vec::new(),
            next_cursor: None,
        };
        respond(id, &payload)
    }

    fn handle_resources_read(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: ResourceReadParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        let message = format!("Resource '{}' not found.", parsed.uri);
        OutboundResponse::error_with_data(id, RESOURCE_NOT_FOUND, message, json!({ "uri": parsed.uri }))
    }

    fn handle_resource_templates_list(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ResourceTemplateListResult {
            resource_templates: Vec::new(),
            next_cursor: None,
        };
        respond(id, &payload)
    }

    fn handle_prompts_list(&self, id: Option<Value>) -> OutboundResponse {
        let payload = PromptListResult {
            prompts: Vec::new(),
            next_cursor: None,
        };
        respond(id, &payload)
    }

    fn handle_prompts_get(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: PromptGetParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        let message = format!("Prompt '{}' is not available.", parsed.name);
        OutboundResponse::invalid_params(id, message)
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct InitializeParams {
    #[serde(rename = "protocolVersion", default)]
    protocol_version: Option<String>,
    #[serde(rename = "clientInfo", default)]
    client_info: Option<ClientInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct ClientInfo {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    protocol_version: String,
    #[serde(rename = "serverInfo")]
    server_info: ImplementationInfo,
    capabilities: ServerCapabilities,
    instructions: String,
}

#[derive(Debug, Serialize)]
struct ImplementationInfo {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    tools: ToolsCapability,
}

#[derive(Debug, Serialize)]
struct ToolsCapability {
    #[serde(rename = "listChanged")]
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct ListToolsResult {
    tools: Vec<ToolDescriptor>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ListResourcesResult {
    resources: Vec<Value>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResourceReadParams {
    uri: String,
}

#[derive(Debug, Serialize)]
struct ResourceTemplateListResult {
    #[serde(rename = "resourceTemplates")]
    resource_templates: Vec<Value>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Serialize)]
struct PromptListResult {
    prompts: Vec<Value>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptGetParams {
    name: String,
}

/// Missing params are read as an empty object.
fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    let value = match params {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(value) => value,
    };
    serde_json::from_value(value).map_err(|err| err.to_string())
}

fn respond<T: Serialize>(id: Option<Value>, payload: &T) -> OutboundResponse {
    match serde_json::to_value(payload) {
        Ok(value) => OutboundResponse::success(id, value),
        Err(err) => {
            log::error!("failed to serialize MCP result: {}", err);
            OutboundResponse::internal_error(id, format!("Failed to serialize result: {err}"))
        }
    }
}
