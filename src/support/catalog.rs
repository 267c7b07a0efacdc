//! Static support content: cards, disclosed programs, follow-up adjacency,
//! fallback paths and crisis hotlines.
//!
//! Everything here is plain data. Choosing which entry to show is done by
//! the advisors in `crate::mcp::advisors`.

use super::model::{ActionPlan, Domain, PolicyDisclosure, SupportCard};

pub const CARDS_PER_DOMAIN: u8 = 2;

pub const BOKJIRO_URL: &str = "https://www.bokjiro.go.kr";
pub const WELFARE_CALL_CENTER: &str = "129";

/// Hotlines attached to every safe message.
pub const SUPPORT_RESOURCES: [&str; 3] = [
    "복지 상담 전화 129",
    "자살예방 상담전화 109",
    "정신건강 위기 상담 1577-0199",
];

/// Added on top of [`SUPPORT_RESOURCES`] when the situation is critical.
pub const EMERGENCY_RESOURCES: [&str; 2] = ["경찰 긴급신고 112", "응급 구조 119"];

pub const SAFE_MESSAGE: &str =
    "지금 이 순간 힘드신 게 당연합니다. 천천히 한 걸음씩 나아가시면 됩니다.";
pub const SAFE_TONE: &str = "비판단적, 지지적";
pub const CRISIS_NOTICE: &str = "지금 위험한 상황이라면 바로 112 또는 119에 연락하세요.";

/// Build the two ranked cards for a domain.
pub fn support_cards(domain: Domain) -> Vec<SupportCard> {
    (1..=CARDS_PER_DOMAIN)
        .map(|number| support_card(domain, number))
        .collect()
}

pub fn support_card(domain: Domain, card_number: u8) -> SupportCard {
    SupportCard {
        card_number,
        title: format!("{} 혜택 카드 {}", domain.label(), card_number),
        what_is_it: "이게 뭐냐면...".to_string(),
        why_now: "왜 지금 맞냐면...".to_string(),
        what_you_can_say: "지금 하실 수 있는 말...".to_string(),
        where_to_go: "어디로...".to_string(),
        if_blocked: "막히면...".to_string(),
    }
}

/// Program behind a card, or `None` for a card number that was never shown.
pub fn policy_for(domain: Domain, card_number: u8) -> Option<PolicyDisclosure> {
    if !(1..=CARDS_PER_DOMAIN).contains(&card_number) {
        return None;
    }
    let second = card_number == 2;
    let (name, contact, website) = match (domain, second) {
        (Domain::Housing, false) => ("청년 월세 한시 특별지원", "1600-1004", BOKJIRO_URL),
        (Domain::Housing, true) => ("주거급여", "1600-0777", BOKJIRO_URL),
        (Domain::Livelihood, false) => ("긴급복지 생계지원", WELFARE_CALL_CENTER, BOKJIRO_URL),
        (Domain::Livelihood, true) => {
            ("기초생활보장 생계급여", WELFARE_CALL_CENTER, BOKJIRO_URL)
        }
        (Domain::MedicalCare, false) => ("재난적 의료비 지원", "1577-1000", "https://www.nhis.or.kr"),
        (Domain::MedicalCare, true) => ("노인맞춤돌봄서비스", WELFARE_CALL_CENTER, BOKJIRO_URL),
        (Domain::EmploymentEducation, false) => {
            ("국민취업지원제도", "1350", "https://www.work24.go.kr")
        }
        (Domain::EmploymentEducation, true) => {
            ("국민내일배움카드", "1350", "https://www.work24.go.kr")
        }
        (Domain::Emotional, false) => {
            ("전국민 마음투자 지원사업", WELFARE_CALL_CENTER, BOKJIRO_URL)
        }
        (Domain::Emotional, true) => ("정신건강복지센터 상담", "1577-0199", BOKJIRO_URL),
        (Domain::CultureLeisure, false) => ("문화누리카드", "1544-3412", "https://www.mnuri.kr"),
        (Domain::CultureLeisure, true) => ("스포츠강좌이용권", WELFARE_CALL_CENTER, BOKJIRO_URL),
        (Domain::LifelongEducation, false) => ("평생교육이용권", "110", "https://www.lllcard.kr"),
        (Domain::LifelongEducation, true) => ("K-MOOC 무료 온라인 강좌", "110", "https://www.kmooc.kr"),
        (Domain::Participation, false) => {
            ("노인일자리 및 사회활동 지원사업", WELFARE_CALL_CENTER, BOKJIRO_URL)
        }
        (Domain::Participation, true) => ("1365 자원봉사 참여", "110", "https://www.1365.go.kr"),
    };

    Some(PolicyDisclosure {
        policy_name: name.to_string(),
        contact: contact.to_string(),
        website: website.to_string(),
    })
}

/// Neighbouring domains worth exploring after `current`, most relevant first.
pub fn adjacent_domains(current: Option<Domain>) -> [Domain; 3] {
    match current {
        None | Some(Domain::Housing) => [
            Domain::MedicalCare,
            Domain::Emotional,
            Domain::EmploymentEducation,
        ],
        Some(Domain::Livelihood) => [
            Domain::Housing,
            Domain::MedicalCare,
            Domain::EmploymentEducation,
        ],
        Some(Domain::MedicalCare) => [Domain::Livelihood, Domain::Emotional, Domain::Housing],
        Some(Domain::EmploymentEducation) => [
            Domain::Livelihood,
            Domain::LifelongEducation,
            Domain::Emotional,
        ],
        Some(Domain::Emotional) => [
            Domain::MedicalCare,
            Domain::Participation,
            Domain::CultureLeisure,
        ],
        Some(Domain::CultureLeisure) => [
            Domain::Emotional,
            Domain::Participation,
            Domain::LifelongEducation,
        ],
        Some(Domain::LifelongEducation) => [
            Domain::EmploymentEducation,
            Domain::CultureLeisure,
            Domain::Participation,
        ],
        Some(Domain::Participation) => [
            Domain::Emotional,
            Domain::CultureLeisure,
            Domain::LifelongEducation,
        ],
    }
}

/// Why a domain is suggested as a follow-up.
pub fn followup_reason(domain: Domain) -> &'static str {
    match domain {
        Domain::Housing => "주거비 부담을 덜 수 있는 지원이 있습니다",
        Domain::Livelihood => "생활비 부족을 메울 수 있는 지원이 있습니다",
        Domain::MedicalCare => "건강 관련 지원이 필요할 수 있습니다",
        Domain::EmploymentEducation => "장기적인 자립을 위한 교육 기회도 있습니다",
        Domain::Emotional => "정서적 지원도 함께 받으실 수 있습니다",
        Domain::CultureLeisure => "마음을 돌볼 수 있는 문화 활동 지원이 있습니다",
        Domain::LifelongEducation => "배우고 싶은 것을 무료로 배울 수 있습니다",
        Domain::Participation => "사람들과 연결되는 활동에 참여할 수 있습니다",
    }
}

pub const FOLLOWUP_MESSAGE: &str =
    "현재 선택하신 지원 외에도 추가로 받으실 수 있는 지원이 있습니다.";

/// Default plan, optionally anchored on the card the caller picked.
pub fn action_plan(selected_card: Option<&str>) -> ActionPlan {
    let (call, prepare) = match selected_card {
        Some(card) => (
            format!("오늘 할 일 1: '{card}' 담당 기관에 전화하기"),
            format!("내일까지 할 일 1: '{card}' 신청 서류 준비하기"),
        ),
        None => (
            "오늘 할 일 1: 담당 기관에 전화하기".to_string(),
            "내일까지 할 일 1: 서류 준비하기".to_string(),
        ),
    };

    ActionPlan {
        today: vec![call, "오늘 할 일 2: 필요 서류 목록 확인하기".to_string()],
        tomorrow: vec![prepare, "내일까지 할 일 2: 방문 예약하기".to_string()],
        fallback: "막히면: 복지 상담 전화 129로 연락하세요".to_string(),
    }
}

pub const PHONE_ALTERNATIVES: [&str; 3] = [
    "복지로(www.bokjiro.go.kr) 온라인 신청",
    "129 콜센터 상담",
    "주민센터 방문",
];

pub const DOCUMENT_ALTERNATIVES: [&str; 3] = [
    "주민센터에서 발급 가능한 서류 목록 확인",
    "온라인 발급 서비스 활용",
    "서류 간소화 신청 가능 여부 문의",
];

pub const ELIGIBILITY_ALTERNATIVES: [&str; 3] = [
    "복지 상담사와 1:1 상담",
    "유사한 다른 제도 탐색",
    "조건 완화된 지역별 제도 확인",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_has_two_titled_cards() {
        for domain in Domain::ALL {
            let cards = support_cards(domain);
            assert_eq!(cards.len(), 2);
            assert_eq!(cards[0].card_number, 1);
            assert_eq!(cards[1].title, format!("{} 혜택 카드 2", domain.label()));
        }
    }

    #[test]
    fn test_default_policy_matches_housing_first_card() {
        let policy = policy_for(Domain::Housing, 1).unwrap();
        assert_eq!(policy.policy_name, "청년 월세 한시 특별지원");
        assert_eq!(policy.website, BOKJIRO_URL);
    }

    #[test]
    fn test_card_outside_shown_range_has_no_policy() {
        assert_eq!(policy_for(Domain::Livelihood, 0), None);
        assert_eq!(policy_for(Domain::Livelihood, 3), None);
        assert!(policy_for(Domain::Livelihood, 2).is_some());
    }

    #[test]
    fn test_adjacent_domains_never_include_current() {
        for domain in Domain::ALL {
            assert!(!adjacent_domains(Some(domain)).contains(&domain));
        }
    }

    #[test]
    fn test_action_plan_mentions_selected_card() {
        let plan = action_plan(Some("주거급여"));
        assert!(plan.today[0].contains("주거급여"));
        assert!(plan.tomorrow[0].contains("주거급여"));
        assert_eq!(action_plan(None).today.len(), 2);
    }
}
