//! MCP Stateless HTTP Handlers for Actix-Web.
//!
//! Each POST carries one JSON-RPC message and gets at most one response.
//! No SSE connections or sessions are kept between requests.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;

use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::service::McpService;

/// MCP State for Actix-Web (stateless version)
pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// RPC handler - POST /mcp
pub async fn rpc_handler(
    state: web::Data<Arc<McpState>>,
    body: web::Json<RpcRequest>,
) -> impl Responder {
    log::info!("Received MCP request: {}", body.method);

    if let Some(response) = state.service.handle_request(body.into_inner()) {
        return HttpResponse::Ok()
            .content_type("application/json")
            .json(response);
    }

    // Notifications return 202 Accepted
    HttpResponse::Accepted().finish()
}

/// Malformed bodies still get a JSON-RPC error object instead of actix's plain text.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = match &err {
        JsonPayloadError::Deserialize(inner) if !inner.is_syntax() && !inner.is_eof() => {
            OutboundResponse::invalid_request(None, format!("Invalid JSON-RPC request: {inner}"))
        }
        _ => OutboundResponse::parse_error(format!("Parse error: {err}")),
    };
    log::warn!("rejected MCP payload: {}", err);

    let http = HttpResponse::BadRequest()
        .content_type("application/json")
        .json(response);
    InternalError::from_response(err, http).into()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// Configure MCP routes (stateless)
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/mcp")
            .app_data(json_config())
            .route(web::post().to(rpc_handler)),
    );

    // Keep /sse route for clients configured with the legacy endpoint
    cfg.service(
        web::resource("/sse")
            .app_data(json_config())
            .route(web::post().to(rpc_handler)),
    );
}
