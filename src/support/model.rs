use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// Public support category. Serialized as its exact Korean label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Domain {
    #[serde(rename = "주거·월세")]
    Housing,
    #[serde(rename = "생활 유지")]
    Livelihood,
    #[serde(rename = "의료·돌봄")]
    MedicalCare,
    #[serde(rename = "고용·교육")]
    EmploymentEducation,
    #[serde(rename = "심리·정서")]
    Emotional,
    #[serde(rename = "문화·여가")]
    CultureLeisure,
    #[serde(rename = "평생교육")]
    LifelongEducation,
    #[serde(rename = "참여·활동")]
    Participation,
}

impl Domain {
    /// All domains, core first.
    pub const ALL: [Domain; 8] = [
        Domain::Housing,
        Domain::Livelihood,
        Domain::MedicalCare,
        Domain::EmploymentEducation,
        Domain::Emotional,
        Domain::CultureLeisure,
        Domain::LifelongEducation,
        Domain::Participation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "주거·월세",
            Self::Livelihood => "생활 유지",
            Self::MedicalCare => "의료·돌봄",
            Self::EmploymentEducation => "고용·교육",
            Self::Emotional => "심리·정서",
            Self::CultureLeisure => "문화·여가",
            Self::LifelongEducation => "평생교육",
            Self::Participation => "참여·활동",
        }
    }

    /// Core domains are offered by default; extended ones only on explicit request.
    pub fn is_core(&self) -> bool {
        !matches!(
            self,
            Self::CultureLeisure | Self::LifelongEducation | Self::Participation
        )
    }

    pub fn core() -> Vec<Domain> {
        Self::ALL.into_iter().filter(Domain::is_core).collect()
    }

    pub fn extended() -> Vec<Domain> {
        Self::ALL.into_iter().filter(|d| !d.is_core()).collect()
    }

    /// Comma separated list of every label, used in error messages.
    pub fn label_list() -> String {
        Self::ALL
            .iter()
            .map(Domain::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown support domain '{0}'")]
pub struct UnknownDomain(pub String);

impl FromStr for Domain {
    type Err = UnknownDomain;

    /// Accepts the exact label as well as spacing/separator variants
    /// such as "주거/월세" or "생활유지".
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(value);
        if wanted.is_empty() {
            return Err(UnknownDomain(value.trim().to_string()));
        }

        Self::ALL
            .into_iter()
            .find(|domain| normalize_label(domain.label()) == wanted)
            .ok_or_else(|| UnknownDomain(value.trim().to_string()))
    }
}

fn normalize_label(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '·' | '・' | '/' | '-' | ',' | '.'))
        .collect()
}

/// Urgency of the caller's situation, 1 (critical) to 3 (routine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum UrgencyLevel {
    Critical = 1,
    Urgent = 2,
    Routine = 3,
}

impl UrgencyLevel {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Critical => "퇴거·위험·응급·폭력 등 즉각 대응이 필요한 상황",
            Self::Urgent => "이번 달 안에 해결해야 하는 단기 압박 상황",
            Self::Routine => "일반적인 지원 탐색 상황",
        }
    }
}

impl From<UrgencyLevel> for u8 {
    fn from(level: UrgencyLevel) -> Self {
        level as u8
    }
}

/// One benefit recommendation. The exact program name is withheld until
/// the caller signals a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportCard {
    pub card_number: u8,
    pub title: String,
    pub what_is_it: String,
    pub why_now: String,
    pub what_you_can_say: String,
    pub where_to_go: String,
    pub if_blocked: String,
}

/// Time-boxed task lists for a chosen support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub today: Vec<String>,
    pub tomorrow: Vec<String>,
    pub fallback: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionContext {
    pub province: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
}

impl RegionContext {
    pub fn is_empty(&self) -> bool {
        self.province.is_none() && self.city.is_none() && self.district.is_none()
    }

    /// Human readable "province city district" with missing parts skipped.
    pub fn label(&self) -> String {
        [&self.province, &self.city, &self.district]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Program disclosed once the caller selects a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDisclosure {
    pub policy_name: String,
    pub contact: String,
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_labels_round_trip_through_from_str() {
        for domain in Domain::ALL {
            assert_eq!(domain.label().parse::<Domain>(), Ok(domain));
        }
    }

    #[test]
    fn test_domain_from_str_accepts_separator_variants() {
        assert_eq!("주거/월세".parse::<Domain>(), Ok(Domain::Housing));
        assert_eq!("생활유지".parse::<Domain>(), Ok(Domain::Livelihood));
        assert_eq!(" 평생 교육 ".parse::<Domain>(), Ok(Domain::LifelongEducation));
    }

    #[test]
    fn test_domain_from_str_rejects_unknown() {
        let err = "부동산".parse::<Domain>().unwrap_err();
        assert_eq!(err, UnknownDomain("부동산".to_string()));
        assert!("".parse::<Domain>().is_err());
    }

    #[test]
    fn test_core_and_extended_split() {
        assert_eq!(Domain::core().len(), 5);
        assert_eq!(
            Domain::extended(),
            vec![
                Domain::CultureLeisure,
                Domain::LifelongEducation,
                Domain::Participation
            ]
        );
    }

    #[test]
    fn test_domain_serializes_as_label() {
        let json = serde_json::to_string(&Domain::MedicalCare).unwrap();
        assert_eq!(json, "\"의료·돌봄\"");
    }

    #[test]
    fn test_urgency_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&UrgencyLevel::Critical).unwrap(), "1");
        assert_eq!(serde_json::to_string(&UrgencyLevel::Routine).unwrap(), "3");
        assert!(UrgencyLevel::Critical < UrgencyLevel::Routine);
    }

    #[test]
    fn test_region_label_skips_missing_parts() {
        let region = RegionContext {
            province: Some("부산광역시".to_string()),
            city: Some("사상구".to_string()),
            district: None,
        };
        assert_eq!(region.label(), "부산광역시 사상구");
        assert!(!region.is_empty());
        assert!(RegionContext::default().is_empty());
    }
}
