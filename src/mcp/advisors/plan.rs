//! Execution plan and fallback paths once a support has been chosen.

use serde::{Deserialize, Serialize};

use super::traits::{Advisor, Validator};
use super::{AdvisorError, SupportAdvisor};
use crate::support::catalog;
use crate::support::model::ActionPlan;

/// Request for `generate_action_steps`.
#[derive(Debug, Deserialize, Default)]
pub struct ActionStepsRequest {
    #[serde(default)]
    pub selected_card: Option<String>,
}

impl Validator for ActionStepsRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        Ok(())
    }
}

impl Advisor<ActionStepsRequest> for SupportAdvisor {
    type Response = ActionPlan;

    fn advise(&self, request: ActionStepsRequest) -> Result<ActionPlan, AdvisorError> {
        let selected = request
            .selected_card
            .as_deref()
            .map(str::trim)
            .filter(|card| !card.is_empty());
        Ok(catalog::action_plan(selected))
    }
}

/// Obstacle the caller ran into while following a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Phone,
    Document,
    Eligibility,
}

impl IssueCategory {
    /// Match an English key or a Korean hint ("전화가 안 돼요", "서류", "자격").
    pub fn detect(issue: &str) -> Option<Self> {
        let issue = issue.trim().to_lowercase();
        if issue.is_empty() {
            return None;
        }

        const PHONE: &[&str] = &["phone", "call", "전화", "연결", "통화", "담당자"];
        const DOCUMENT: &[&str] = &["document", "paper", "서류", "증명", "발급"];
        const ELIGIBILITY: &[&str] = &["eligib", "자격", "조건", "대상"];

        if PHONE.iter().any(|hint| issue.contains(hint)) {
            Some(Self::Phone)
        } else if DOCUMENT.iter().any(|hint| issue.contains(hint)) {
            Some(Self::Document)
        } else if ELIGIBILITY.iter().any(|hint| issue.contains(hint)) {
            Some(Self::Eligibility)
        } else {
            None
        }
    }
}

/// Request for `generate_fallback_paths`.
#[derive(Debug, Deserialize, Default)]
pub struct FallbackRequest {
    #[serde(default)]
    pub issue_type: Option<String>,
}

impl Validator for FallbackRequest {
    fn validate(&self) -> Result<(), AdvisorError> {
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct Alternatives {
    pub alternatives: Vec<String>,
}

impl Alternatives {
    fn from_static(items: &[&str]) -> Self {
        Self {
            alternatives: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

/// All three categories are always returned; `focus` points at the one the
/// caller is stuck on, if it could be told.
#[derive(Debug, Serialize)]
pub struct FallbackPaths {
    pub phone_issues: Alternatives,
    pub document_issues: Alternatives,
    pub eligibility_issues: Alternatives,
    pub focus: Option<IssueCategory>,
}

impl Advisor<FallbackRequest> for SupportAdvisor {
    type Response = FallbackPaths;

    fn advise(&self, request: FallbackRequest) -> Result<FallbackPaths, AdvisorError> {
        Ok(FallbackPaths {
            phone_issues: Alternatives::from_static(&catalog::PHONE_ALTERNATIVES),
            document_issues: Alternatives::from_static(&catalog::DOCUMENT_ALTERNATIVES),
            eligibility_issues: Alternatives::from_static(&catalog::ELIGIBILITY_ALTERNATIVES),
            focus: request.issue_type.as_deref().and_then(IssueCategory::detect),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_category_detection() {
        assert_eq!(IssueCategory::detect("전화가 안 돼요"), Some(IssueCategory::Phone));
        assert_eq!(IssueCategory::detect("Document"), Some(IssueCategory::Document));
        assert_eq!(IssueCategory::detect("자격이 애매해요"), Some(IssueCategory::Eligibility));
        assert_eq!(IssueCategory::detect("모르겠어요"), None);
        assert_eq!(IssueCategory::detect(""), None);
    }

    #[test]
    fn test_fallback_paths_always_has_three_categories() {
        let paths = SupportAdvisor.advise(FallbackRequest::default()).unwrap();
        assert_eq!(paths.phone_issues.alternatives.len(), 3);
        assert_eq!(paths.document_issues.alternatives.len(), 3);
        assert_eq!(paths.eligibility_issues.alternatives.len(), 3);
        assert!(paths.focus.is_none());
    }

    #[test]
    fn test_blank_selected_card_uses_generic_plan() {
        let plan = SupportAdvisor
            .advise(ActionStepsRequest {
                selected_card: Some("  ".to_string()),
            })
            .unwrap();
        assert_eq!(plan.today[0], "오늘 할 일 1: 담당 기관에 전화하기");
    }
}
