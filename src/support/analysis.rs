//! Keyword rules over the caller's text.
//!
//! These are deliberately shallow: each rule is a substring or regex match
//! and every function has a default for text that matches nothing.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::model::{Domain, UrgencyLevel};
use super::region::extract_region;

lazy_static! {
    static ref AGE: Regex =
        Regex::new(r"\d{1,3}\s*(?:대|살|세)|청년|청소년|중년|노인|어르신|대학생").expect("Invalid regex");
    static ref CARD_ORDINAL: Regex = Regex::new(
        r"(?:^|[^0-9])(?P<digit>[1-9])\s*번(?:\s*째)?|(?P<word>첫|두|둘|세)\s*(?:번\s*)?째"
    )
    .expect("Invalid regex");
    /// What has to follow an ordinal for it to be a choice ("2번 할게요",
    /// "첫 번째 거 신청", "1번이 뭐예요") rather than a count ("2번 전화했는데").
    static ref SELECTION_CUE: Regex = Regex::new(
        r"^\s*(?:카드|거|것|걸)?\s*(?:으로|로|을|를|이|가|은|는)?\s*(?:선택|할게|할래|하겠|신청|뭐|무엇|궁금|알려|요)"
    )
    .expect("Invalid regex");
    static ref NAME_QUESTION: Regex = Regex::new(
        r"제도\s*명|제도\s*이름|정확한\s*(?:이름|제도|명칭)|무슨\s*제도|이름이\s*뭐|정확히\s*뭐"
    )
    .expect("Invalid regex");
    static ref CONTACT_INTENT: Regex =
        Regex::new(r"전화|신청|연락처|어디로|문의|접수").expect("Invalid regex");
}

const CRITICAL_KEYWORDS: &[&str] = &[
    "퇴거", "쫓겨", "위험", "응급", "폭력", "폭행", "성폭행", "가정폭력", "학대", "자살", "죽고",
];

const URGENT_KEYWORDS: &[&str] = &[
    "이번 달", "이번달", "곧", "급한", "급해", "당장", "내일", "밀렸",
];

const HOUSEHOLD_KEYWORDS: &[&str] = &[
    "혼자", "1인", "가족", "자녀", "아이", "부모", "배우자", "남편", "아내", "동거", "결혼",
];

const INCOME_KEYWORDS: &[&str] = &[
    "백수", "실직", "무직", "직장", "회사", "알바", "소득", "수입", "월급", "일하", "취업", "퇴사",
    "은퇴", "연금",
];

/// Domains used when nothing in the text points anywhere.
pub const DEFAULT_DOMAINS: [Domain; 2] = [Domain::Housing, Domain::Livelihood];

fn domain_keywords(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Housing => &[
            "월세", "전세", "보증금", "주거", "집세", "이사", "집주인", "퇴거", "고시원", "임대",
            "아파트", "관리비",
        ],
        Domain::Livelihood => &[
            "생활비", "생계", "식비", "공과금", "전기요금", "가스비", "빚", "부채", "굶",
        ],
        Domain::MedicalCare => &[
            "병원", "의료", "치료", "수술", "진료", "약값", "아프", "아파서", "아파요", "아팠",
            "간병", "돌봄", "장애",
        ],
        Domain::EmploymentEducation => &[
            "취업", "일자리", "실직", "백수", "구직", "해고", "직장", "알바", "자격증", "직업훈련",
        ],
        Domain::Emotional => &[
            "우울", "불안", "외로", "무서", "스트레스", "힘들", "죽고", "자살", "마음",
        ],
        Domain::CultureLeisure => &["문화", "여가", "공연", "영화", "여행", "운동", "취미"],
        Domain::LifelongEducation => &["평생교육", "배우고", "공부", "강좌", "학위", "검정고시"],
        Domain::Participation => &["봉사", "참여", "모임", "동아리", "활동", "커뮤니티"],
    }
}

/// Classify urgency from crisis and time-pressure words.
pub fn assess_urgency(text: &str) -> UrgencyLevel {
    if CRITICAL_KEYWORDS.iter().any(|k| text.contains(k)) {
        UrgencyLevel::Critical
    } else if URGENT_KEYWORDS.iter().any(|k| text.contains(k)) {
        UrgencyLevel::Urgent
    } else {
        UrgencyLevel::Routine
    }
}

/// Domains mentioned in the text, ordered by first mention.
/// Empty when nothing matches; callers pick their own default.
pub fn detect_domains(text: &str) -> Vec<Domain> {
    let mut found: Vec<(usize, Domain)> = Domain::ALL
        .into_iter()
        .filter_map(|domain| {
            domain_keywords(domain)
                .iter()
                .filter_map(|keyword| text.find(keyword))
                .min()
                .map(|position| (position, domain))
        })
        .collect();

    found.sort_by_key(|(position, _)| *position);
    found.into_iter().map(|(_, domain)| domain).collect()
}

/// Every known keyword present in the text, in order of first appearance.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut hits: Vec<(usize, &str)> = Domain::ALL
        .into_iter()
        .flat_map(domain_keywords)
        .chain(CRITICAL_KEYWORDS)
        .chain(URGENT_KEYWORDS)
        .filter_map(|keyword| text.find(keyword).map(|position| (position, *keyword)))
        .collect();

    hits.sort_by_key(|(position, keyword)| (*position, std::cmp::Reverse(keyword.len())));

    let mut keywords: Vec<String> = Vec::new();
    for (_, keyword) in hits {
        // Drop keywords swallowed by a longer one ("폭력" inside "가정폭력").
        if keywords.iter().any(|kept| kept.contains(keyword)) {
            continue;
        }
        keywords.push(keyword.to_string());
    }
    keywords
}

/// Aspects of the situation a counsellor would still need to ask about.
pub fn missing_info(text: &str) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !AGE.is_match(text) {
        missing.push("연령대");
    }
    if extract_region(text).is_none() {
        missing.push("거주 지역");
    }
    if !HOUSEHOLD_KEYWORDS.iter().any(|k| text.contains(k)) {
        missing.push("가구 구성");
    }
    if !INCOME_KEYWORDS.iter().any(|k| text.contains(k)) {
        missing.push("소득·고용 상태");
    }
    missing
}

/// Why a program name may be disclosed. Serialized into the reveal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// "1번이 뭐예요?", "첫 번째 할게요"
    CardSelection,
    /// "제도명 알려주세요", "무슨 제도예요?"
    NameQuestion,
    /// "어디로 전화해요?", "신청 방법은?"
    ContactIntent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub kind: TriggerKind,
    /// The card the caller picked, as said. May be outside the cards actually shown.
    pub card_number: Option<u8>,
}

/// Detect a phrase that allows the exact program name to be disclosed.
pub fn detect_trigger(text: &str) -> Option<Trigger> {
    let card_number = selected_card_number(text);

    let kind = if card_number.is_some() {
        TriggerKind::CardSelection
    } else if NAME_QUESTION.is_match(text) {
        TriggerKind::NameQuestion
    } else if CONTACT_INTENT.is_match(text) {
        TriggerKind::ContactIntent
    } else {
        return None;
    };

    Some(Trigger { kind, card_number })
}

fn selected_card_number(text: &str) -> Option<u8> {
    CARD_ORDINAL
        .captures_iter(text)
        .filter(|captures| {
            captures
                .get(0)
                .is_some_and(|ordinal| SELECTION_CUE.is_match(&text[ordinal.end()..]))
        })
        .find_map(|captures| {
            if let Some(digit) = captures.name("digit") {
                return digit.as_str().parse().ok();
            }
            match captures.name("word")?.as_str() {
                "첫" => Some(1),
                "두" | "둘" => Some(2),
                "세" => Some(3),
                _ => None,
            }
        })
}
