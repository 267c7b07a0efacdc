//! Tool-call counters exposed next to the HTTP metrics.
//!
//! The actix middleware keeps its own registry for request metrics; tool
//! counters live in the process-wide default registry and are served at
//! `/metrics/tools`.

use actix_web::{HttpResponse, Responder};
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    static ref TOOL_CALLS: IntCounterVec = register_int_counter_vec!(
        "advisor_tool_calls_total",
        "Number of MCP tool calls by tool name and outcome",
        &["tool", "outcome"]
    )
    .expect("Invalid tool call counter");
}

fn outcome(is_error: bool) -> &'static str {
    if is_error {
        "error"
    } else {
        "success"
    }
}

pub fn record_tool_call(tool: &str, is_error: bool) {
    TOOL_CALLS.with_label_values(&[tool, outcome(is_error)]).inc();
}

/// Render the default registry in the Prometheus text format.
pub fn render() -> Result<String, prometheus::Error> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
}

/// GET /metrics/tools
pub async fn tool_metrics_handler() -> impl Responder {
    match render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(err) => {
            log::error!("failed to render tool metrics: {}", err);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error(&err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tool_call_increments() {
        let counter = TOOL_CALLS.with_label_values(&["metrics_test_tool", "success"]);
        let before = counter.get();
        record_tool_call("metrics_test_tool", false);
        assert_eq!(counter.get(), before + 1);
    }

    #[test]
    fn test_render_contains_counter() {
        record_tool_call("metrics_render_tool", true);
        let body = render().unwrap();
        assert!(body.contains("advisor_tool_calls_total"));
        assert!(body.contains("metrics_render_tool"));
    }
}
