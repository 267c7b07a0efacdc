//! MCP Tools module - defines tools exposed via JSON-RPC.
//!
//! Each tool wraps one advisor operation and provides:
//! - Tool descriptor (name, Korean description with calling rules, input schema)
//! - Argument parsing and optional strict validation
//! - Execution and result formatting

pub mod cards;
pub mod context;
pub mod orchestrate;
pub mod plan;
pub mod registry;
pub mod safety;

pub use registry::{ToolDescriptor, ToolRegistry};
