//! Newline-delimited JSON-RPC over stdin/stdout.
//!
//! Stdout carries protocol messages only; logging goes to stderr.

use serde_json::Value;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::service::McpService;

/// Serve requests from stdin until it is closed.
pub async fn run_stdio(service: McpService) -> io::Result<()> {
    log::info!("MCP stdio transport ready");
    serve(&service, BufReader::new(io::stdin()), io::stdout()).await
}

/// Process one message per line, writing one response line per request.
pub async fn serve<R, W>(service: &McpService, reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        log::debug!("stdio request: {}", line);

        let Some(response) = handle_line(service, line) else {
            continue;
        };

        let encoded = match serde_json::to_string(&response) {
            Ok(encoded) => encoded,
            Err(err) => {
                log::error!("failed to encode response: {}", err);
                continue;
            }
        };

        writer.write_all(encoded.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    log::info!("stdin closed, shutting down");
    Ok(())
}

fn handle_line(service: &McpService, line: &str) -> Option<OutboundResponse> {
    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("unparseable stdio message: {}", err);
            return Some(OutboundResponse::parse_error(format!("Parse error: {err}")));
        }
    };

    let id = value.get("id").cloned();
    match serde_json::from_value::<RpcRequest>(value) {
        Ok(request) => service.handle_request(request),
        Err(err) => Some(OutboundResponse::invalid_request(
            id,
            format!("Invalid JSON-RPC request: {err}"),
        )),
    }
}
