//! MCP (Model Context Protocol) Module
//!
//! Provides JSON-RPC 2.0 over stateless HTTP and stdio for AI model integration.

pub mod advisors;
pub mod content;
pub mod handlers;
pub mod rpc;
pub mod service;
pub mod stdio;
pub mod tools;

pub use handlers::{config, McpState};
pub use service::McpService;
pub use stdio::run_stdio;
