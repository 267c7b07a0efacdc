//! Tool registry - central routing for MCP tools.
//!
//! Provides `list_tools()` and `call_tool()` per MCP spec. Every tool is a
//! pure computation over its arguments, so calls are synchronous and the
//! registry holds no per-session state.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::mcp::advisors::{
    ActionStepsRequest, Advisor, AdvisorError, DomainsRequest, FallbackRequest, FollowupRequest,
    NormalizeRequest, OrchestrateRequest, RankCardsRequest, RegionRequest, RevealPolicyRequest,
    SafeResponseRequest, SupportAdvisor, UrgencyRequest, Validator,
};
use crate::mcp::content::{success_payload, ToolResult};
use crate::metrics;

use super::cards;
use super::context;
use super::orchestrate;
use super::plan;
use super::safety;

/// Tool descriptor conforming to MCP specification.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Central registry for all MCP tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    advisor: SupportAdvisor,
    strict_input: bool,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ToolRegistry {
    /// Create a registry. With `strict_input` set, blank required text is rejected.
    pub fn new(strict_input: bool) -> Self {
        Self {
            advisor: SupportAdvisor::new(),
            strict_input,
        }
    }

    /// List all available tools per MCP spec, main entry point first.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![
            orchestrate::descriptor(),
            context::normalize_user_context_descriptor(),
            context::assess_urgency_level_descriptor(),
            cards::expose_available_domains_descriptor(),
            cards::rank_support_cards_descriptor(),
            plan::generate_action_steps_descriptor(),
            plan::generate_fallback_paths_descriptor(),
            safety::descriptor(),
            context::collect_region_context_descriptor(),
            cards::reveal_policy_name_descriptor(),
            cards::suggest_followup_options_descriptor(),
        ]
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.list_tools().iter().any(|tool| tool.name == name)
    }

    /// Call a tool by name with the given arguments.
    pub fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        let result = match name {
            orchestrate::TOOL_NAME => self.dispatch::<OrchestrateRequest>(arguments),
            context::NORMALIZE_USER_CONTEXT_TOOL => self.dispatch::<NormalizeRequest>(arguments),
            context::ASSESS_URGENCY_LEVEL_TOOL => self.dispatch::<UrgencyRequest>(arguments),
            context::COLLECT_REGION_CONTEXT_TOOL => self.dispatch::<RegionRequest>(arguments),
            cards::EXPOSE_AVAILABLE_DOMAINS_TOOL => self.dispatch::<DomainsRequest>(arguments),
            cards::RANK_SUPPORT_CARDS_TOOL => self.dispatch::<RankCardsRequest>(arguments),
            cards::REVEAL_POLICY_NAME_TOOL => self.dispatch::<RevealPolicyRequest>(arguments),
            cards::SUGGEST_FOLLOWUP_OPTIONS_TOOL => self.dispatch::<FollowupRequest>(arguments),
            plan::GENERATE_ACTION_STEPS_TOOL => self.dispatch::<ActionStepsRequest>(arguments),
            plan::GENERATE_FALLBACK_PATHS_TOOL => self.dispatch::<FallbackRequest>(arguments),
            safety::TOOL_NAME => self.dispatch::<SafeResponseRequest>(arguments),
            _ => {
                log::warn!("unknown tool requested: {}", name);
                metrics::record_tool_call("unknown", true);
                return ToolResult::error(self.unknown_tool_message(name));
            }
        };

        metrics::record_tool_call(name, result.is_error);
        result
    }

    fn unknown_tool_message(&self, name: &str) -> String {
        let names: Vec<String> = self.list_tools().into_iter().map(|tool| tool.name).collect();
        format!(
            "'{}' 도구는 존재하지 않습니다. 사용 가능한 도구: {}",
            name,
            names.join(", ")
        )
    }

    fn dispatch<Req>(&self, arguments: Option<Value>) -> ToolResult
    where
        Req: DeserializeOwned + Validator,
        SupportAdvisor: Advisor<Req>,
    {
        match self.run::<Req>(arguments) {
            Ok(result) => result,
            Err(err) => {
                log::debug!("tool call rejected: {}", err);
                ToolResult::error(err.to_string())
            }
        }
    }

    fn run<Req>(&self, arguments: Option<Value>) -> Result<ToolResult, AdvisorError>
    where
        Req: DeserializeOwned + Validator,
        SupportAdvisor: Advisor<Req>,
    {
        let request = parse_arguments::<Req>(arguments)?;

        if self.strict_input {
            request.validate()?;
        }

        let response = self.advisor.advise(request)?;
        Ok(success_payload(&response))
    }
}

/// Absent or null arguments are read as an empty object so every field falls
/// back to its default.
fn parse_arguments<T: DeserializeOwned>(arguments: Option<Value>) -> Result<T, AdvisorError> {
    let value = match arguments {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(value) => value,
    };
    serde_json::from_value(value).map_err(|err| AdvisorError::InvalidArguments(err.to_string()))
}
