//! Content types module for MCP tool responses.

pub mod builder;
pub mod types;

pub use builder::{success_payload, ContentBuilder};
pub use types::{ContentItem, ToolResult};
