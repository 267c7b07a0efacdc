use korean_support_advisor::support::analysis::{detect_domains, missing_info};
use korean_support_advisor::support::model::{Domain, RegionContext};
use korean_support_advisor::support::region::extract_region;

fn parts(region: &RegionContext) -> (Option<&str>, Option<&str>, Option<&str>) {
    (
        region.province.as_deref(),
        region.city.as_deref(),
        region.district.as_deref(),
    )
}

#[test]
fn test_cheonan_dujeong_dong() {
    let region = extract_region("천안 두정동이에요").unwrap();
    assert_eq!(parts(&region), (Some("충청남도"), Some("천안시"), Some("두정동")));
    assert_eq!(region.label(), "충청남도 천안시 두정동");
}

#[test]
fn test_region_inside_longer_sentence() {
    let region = extract_region("저는 30대고 수원에서 혼자 살아요").unwrap();
    assert_eq!(parts(&region), (Some("경기도"), Some("수원시"), None));
}

#[test]
fn test_province_alias() {
    let region = extract_region("충남 아산시 배방읍이에요").unwrap();
    assert_eq!(parts(&region), (Some("충청남도"), Some("아산시"), Some("배방읍")));
}

#[test]
fn test_unknown_city_by_suffix() {
    let region = extract_region("경상남도 통영시 거주").unwrap();
    assert_eq!(parts(&region), (Some("경상남도"), Some("통영시"), None));
}

#[test]
fn test_region_fills_missing_info() {
    let missing = missing_info("서울 강남구에 살아요");
    assert!(!missing.contains(&"거주 지역"));
    assert!(missing.contains(&"연령대"));
}

#[test]
fn test_region_words_do_not_create_domains() {
    assert!(detect_domains("천안 두정동이에요").is_empty());
    assert_eq!(detect_domains("대전 중구인데 월세가 걱정이에요"), vec![Domain::Housing]);
}

#[test]
fn test_everyday_words_leave_region_missing() {
    assert!(extract_region("장애아동이 있어요").is_none());
    assert!(missing_info("장애아동이 있어요").contains(&"거주 지역"));

    let region = extract_region("서울에 사는데 신청하면 되나요").unwrap();
    assert_eq!(parts(&region), (Some("서울특별시"), None, None));
}

#[test]
fn test_known_city_after_lookalike_word() {
    let region = extract_region("여자친구는 천안에 살아요").unwrap();
    assert_eq!(parts(&region), (Some("충청남도"), Some("천안시"), None));
}
