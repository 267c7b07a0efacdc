//! Advisors module - business logic behind each MCP tool.
//!
//! Every tool has a request type (deserialized from the tool arguments) and
//! a response type. [`SupportAdvisor`] implements [`Advisor`] for each pair:
//! - `orchestrate` - the full one-call consultation
//! - `context` - situation summary, urgency, region
//! - `cards` - domains, ranked cards, policy disclosure, follow-ups
//! - `plan` - action steps and fallback paths
//! - `safety` - the closing safe message

pub mod cards;
pub mod context;
pub mod orchestrate;
pub mod plan;
pub mod safety;
pub mod traits;
pub mod validation;

pub use cards::{
    AvailableDomains, DomainsRequest, FollowupDomain, FollowupOptions, FollowupRequest,
    PolicyReveal, RankCardsRequest, RankedCards, RevealPolicyRequest,
};
pub use context::{
    NormalizeRequest, NormalizedContext, RegionRequest, RegionResponse, UrgencyAssessment,
    UrgencyRequest,
};
pub use orchestrate::{OrchestrateRequest, OrchestratedResponse};
pub use plan::{ActionStepsRequest, Alternatives, FallbackPaths, FallbackRequest, IssueCategory};
pub use safety::{SafeResponse, SafeResponseRequest};
pub use traits::{Advisor, Validator};

use thiserror::Error;

use crate::support::model::{Domain, UnknownDomain};

/// Errors an advisor can report back to the calling agent.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(
        "'{0}'은(는) 지원 분야가 아닙니다. 가능한 분야: {labels}",
        labels = Domain::label_list()
    )]
    InvalidDomain(String),
    #[error("{0}")]
    EmptyInput(String),
    #[error("인자가 올바르지 않습니다: {0}")]
    InvalidArguments(String),
}

impl From<UnknownDomain> for AdvisorError {
    fn from(err: UnknownDomain) -> Self {
        Self::InvalidDomain(err.0)
    }
}

/// Stateless advisor shared by all tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SupportAdvisor;

impl SupportAdvisor {
    pub fn new() -> Self {
        Self
    }
}

/// Parse an optional domain label; blank counts as absent.
pub(crate) fn parse_optional_domain(value: Option<&str>) -> Result<Option<Domain>, AdvisorError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => Ok(Some(label.parse::<Domain>()?)),
    }
}
