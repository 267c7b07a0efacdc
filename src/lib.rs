use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod mcp;
pub mod metrics;
pub mod support;

use crate::config::{AdvisorConfig, Transport};
use crate::mcp::{McpService, McpState};
use crate::mcp::tools::ToolRegistry;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::support::routes::health,
        crate::support::routes::list_tools,
        crate::support::routes::list_domains,
        crate::support::routes::invoke_tool
    ),
    components(
        schemas(
            support::routes::HealthResponse,
            support::routes::DomainInfo,
            support::model::Domain,
            mcp::tools::ToolDescriptor,
            mcp::content::ToolResult,
            mcp::content::ContentItem,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Advisor", description = "Korean public-support advisory tools over REST.")
    ),
    servers(
        (url = "http://127.0.0.1:8080", description = "Local server")
    )
)]
pub struct ApiDoc;

/// Shared MCP state for the given configuration.
pub fn app_state(config: &AdvisorConfig) -> web::Data<Arc<McpState>> {
    let service = McpService::new(ToolRegistry::new(config.strict_input));
    web::Data::new(Arc::new(McpState::new(service)))
}

/// Register MCP, REST and tool-metrics routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(mcp::config)
        .service(web::scope("/api").configure(support::routes::config))
        .service(
            web::resource("/metrics/tools").route(web::get().to(metrics::tool_metrics_handler)),
        );
}

fn init_logging() {
    // stderr keeps stdout free for the stdio transport
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .try_init();
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    init_logging();

    let config = AdvisorConfig::from_env().context("invalid advisor configuration")?;
    log::info!(
        "starting {} v{} (transport={:?}, strict_input={})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.transport,
        config.strict_input
    );

    let state = app_state(&config);

    if config.transport == Transport::Stdio {
        mcp::run_stdio(state.service.clone()).await?;
        return Ok(());
    }

    let prometheus = PrometheusMetricsBuilder::new("korean_support_advisor")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow!("Failed to create Prometheus metrics middleware: {}", e))?;

    let (host, port) = config.bind_address();
    log::info!("Starting server at http://{}:{}", host, port);

    let origins = config.allowed_origins.clone();

    HttpServer::new(move || {
        let state = state.clone();
        let prometheus = prometheus.clone();
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(state)
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind {}:{}", host, port))?
    .run()
    .await?;

    Ok(())
}
