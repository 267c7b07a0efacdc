use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::mcp::content::ToolResult;
use crate::mcp::tools::ToolDescriptor;
use crate::mcp::McpState;
use crate::support::model::Domain;
use crate::ErrorResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub tools: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DomainInfo {
    pub domain: Domain,
    pub core: bool,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Advisor",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health(state: web::Data<Arc<McpState>>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tools: state.service.registry().list_tools().len(),
    })
}

#[utoipa::path(
    get,
    path = "/api/tools",
    tag = "Advisor",
    responses(
        (status = 200, description = "All tool descriptors", body = Vec<ToolDescriptor>)
    )
)]
pub async fn list_tools(state: web::Data<Arc<McpState>>) -> impl Responder {
    HttpResponse::Ok().json(state.service.registry().list_tools())
}

#[utoipa::path(
    get,
    path = "/api/domains",
    tag = "Advisor",
    responses(
        (status = 200, description = "The eight support domains", body = Vec<DomainInfo>)
    )
)]
pub async fn list_domains() -> impl Responder {
    let domains: Vec<DomainInfo> = Domain::ALL
        .iter()
        .map(|domain| DomainInfo {
            domain: *domain,
            core: domain.is_core(),
        })
        .collect();
    HttpResponse::Ok().json(domains)
}

#[utoipa::path(
    post,
    path = "/api/tools/{name}",
    tag = "Advisor",
    params(
        ("name" = String, Path, description = "Tool name, e.g. rank_support_cards")
    ),
    request_body(content = Value, description = "Tool arguments as a JSON object; may be empty"),
    responses(
        (status = 200, description = "Tool executed", body = ToolResult),
        (status = 400, description = "Malformed body or tool reported an error", body = ToolResult),
        (status = 404, description = "Unknown tool", body = ErrorResponse)
    )
)]
pub async fn invoke_tool(
    state: web::Data<Arc<McpState>>,
    path: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    let name = path.into_inner();
    let registry = state.service.registry();

    if !registry.has_tool(&name) {
        log::warn!("REST call for unknown tool: {}", name);
        return HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
            "Tool '{}' not found",
            name
        )));
    }

    let arguments = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                return HttpResponse::BadRequest()
                    .json(ErrorResponse::bad_request(&format!("Invalid JSON body: {}", e)))
            }
        }
    };

    let result = registry.call_tool(&name, arguments);
    if result.is_error {
        HttpResponse::BadRequest().json(result)
    } else {
        HttpResponse::Ok().json(result)
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/domains").route(web::get().to(list_domains)))
        .service(web::resource("/tools").route(web::get().to(list_tools)))
        .service(web::resource("/tools/{name}").route(web::post().to(invoke_tool)));
}
