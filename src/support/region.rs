//! Region extraction from free text ("천안 두정동이에요", "서울 강남구에 살아요").
//!
//! Known provinces and major cities are resolved through a small gazetteer;
//! anything else is classified by its administrative suffix.

use lazy_static::lazy_static;
use regex::Regex;

use super::model::RegionContext;

lazy_static! {
    static ref HANGUL_TOKEN: Regex = Regex::new(r"[가-힣0-9]+").expect("Invalid regex");
}

/// Full province name followed by the short forms people actually type.
const PROVINCES: &[(&str, &[&str])] = &[
    ("서울특별시", &["서울", "서울시"]),
    ("부산광역시", &["부산", "부산시"]),
    ("대구광역시", &["대구", "대구시"]),
    ("인천광역시", &["인천", "인천시"]),
    ("광주광역시", &["광주", "광주시"]),
    ("대전광역시", &["대전", "대전시"]),
    ("울산광역시", &["울산", "울산시"]),
    ("세종특별자치시", &["세종", "세종시"]),
    ("경기도", &["경기"]),
    ("강원특별자치도", &["강원", "강원도"]),
    ("충청북도", &["충북"]),
    ("충청남도", &["충남"]),
    ("전북특별자치도", &["전북", "전라북도"]),
    ("전라남도", &["전남"]),
    ("경상북도", &["경북"]),
    ("경상남도", &["경남"]),
    ("제주특별자치도", &["제주", "제주도"]),
];

/// Major cities (without the trailing 시) and their province.
const CITIES: &[(&str, &str)] = &[
    ("수원", "경기도"),
    ("성남", "경기도"),
    ("고양", "경기도"),
    ("용인", "경기도"),
    ("부천", "경기도"),
    ("안산", "경기도"),
    ("안양", "경기도"),
    ("남양주", "경기도"),
    ("화성", "경기도"),
    ("평택", "경기도"),
    ("의정부", "경기도"),
    ("시흥", "경기도"),
    ("파주", "경기도"),
    ("김포", "경기도"),
    ("천안", "충청남도"),
    ("아산", "충청남도"),
    ("공주", "충청남도"),
    ("논산", "충청남도"),
    ("당진", "충청남도"),
    ("서산", "충청남도"),
    ("청주", "충청북도"),
    ("충주", "충청북도"),
    ("제천", "충청북도"),
    ("전주", "전북특별자치도"),
    ("익산", "전북특별자치도"),
    ("군산", "전북특별자치도"),
    ("목포", "전라남도"),
    ("여수", "전라남도"),
    ("순천", "전라남도"),
    ("포항", "경상북도"),
    ("경주", "경상북도"),
    ("구미", "경상북도"),
    ("안동", "경상북도"),
    ("창원", "경상남도"),
    ("김해", "경상남도"),
    ("진주", "경상남도"),
    ("양산", "경상남도"),
    ("거제", "경상남도"),
    ("원주", "강원특별자치도"),
    ("춘천", "강원특별자치도"),
    ("강릉", "강원특별자치도"),
    ("서귀포", "제주특별자치도"),
];

/// Two-letter districts that would otherwise be too short to trust.
const SHORT_GU: &[&str] = &["중구", "동구", "서구", "남구", "북구"];

/// Everyday words that end like an administrative unit (시/군/구/동/리).
const COMMON_WORD_ENDINGS: &[&str] = &[
    "친구", "가구", "도구", "연구", "요구", "욕구", "입구", "출구", "창구", "기구", "하구", "했구",
    "겠구", "장군", "여군", "하군", "했군", "겠군", "다시", "혹시", "역시", "당시", "동시", "무시",
    "표시", "지시", "수시", "임시", "잠시", "활동", "운동", "노동", "행동", "이동", "감동", "충동",
    "자동", "아동", "공동", "출동", "변동", "작동", "연동", "자리", "거리", "머리", "소리", "우리",
    "처리", "관리", "정리", "요리", "무리", "분리", "수리",
];

/// Conditional verb endings that collide with 면 ("신청하면", "받으면").
const CONDITIONAL_ENDINGS: &[&str] = &[
    "하면", "되면", "으면", "려면", "다면", "라면", "이면", "지면", "시면", "보면", "가면", "오면",
    "나면", "주면", "서면",
];

/// Trailing particles and copulas, longest first.
const PARTICLES: &[&str] = &[
    "이에요", "입니다", "이예요", "예요", "에요", "에서", "이요", "이고", "이며", "인데",
    "에", "은", "는", "이", "가", "을", "를", "로", "도", "요", "쪽",
];

/// Extract a region from the caller's words. Returns `None` when no part
/// of a region could be recognized.
pub fn extract_region(text: &str) -> Option<RegionContext> {
    let tokens: Vec<&str> = HANGUL_TOKEN.find_iter(text).map(|m| m.as_str()).collect();
    let mut region = RegionContext::default();

    // Known names first, so a suffix guess never shadows a real city.
    for token in &tokens {
        for candidate in candidates(token) {
            if resolve_known(candidate, &mut region) {
                break;
            }
        }
    }

    for token in &tokens {
        for candidate in candidates(token) {
            if is_known(candidate) || classify_by_suffix(candidate, &mut region) {
                break;
            }
        }
    }

    (!region.is_empty()).then_some(region)
}

fn candidates(token: &str) -> Vec<&str> {
    let mut out = vec![token];
    for particle in PARTICLES {
        if let Some(stem) = token.strip_suffix(particle) {
            if stem.chars().count() >= 2 {
                out.push(stem);
            }
        }
    }
    out
}

fn resolve_known(word: &str, region: &mut RegionContext) -> bool {
    if let Some(province) = lookup_province(word) {
        region.province.get_or_insert_with(|| province.to_string());
        return true;
    }

    if let Some((city, province)) = lookup_city(word) {
        region.province.get_or_insert_with(|| province.to_string());
        region.city.get_or_insert(city);
        return true;
    }

    false
}

fn is_known(word: &str) -> bool {
    lookup_province(word).is_some() || lookup_city(word).is_some()
}

fn classify_by_suffix(word: &str, region: &mut RegionContext) -> bool {
    if is_common_word(word) {
        return false;
    }

    let len = word.chars().count();

    if is_city_like(word, len) {
        region.city.get_or_insert_with(|| word.to_string());
        return true;
    }

    if is_district_like(word, len, region) {
        region.district.get_or_insert_with(|| word.to_string());
        return true;
    }

    false
}

fn is_common_word(word: &str) -> bool {
    COMMON_WORD_ENDINGS
        .iter()
        .chain(CONDITIONAL_ENDINGS)
        .any(|ending| word.ends_with(ending))
}

fn lookup_province(word: &str) -> Option<&'static str> {
    PROVINCES
        .iter()
        .find(|(full, aliases)| *full == word || aliases.contains(&word))
        .map(|(full, _)| *full)
}

fn lookup_city(word: &str) -> Option<(String, &'static str)> {
    let stem = word.strip_suffix('시').unwrap_or(word);
    CITIES
        .iter()
        .find(|(name, _)| *name == stem)
        .map(|(name, province)| (format!("{name}시"), *province))
}

fn is_city_like(word: &str, len: usize) -> bool {
    if SHORT_GU.contains(&word) {
        return true;
    }
    len >= 3 && (word.ends_with('시') || word.ends_with('군') || word.ends_with('구'))
}

fn is_district_like(word: &str, len: usize, region: &RegionContext) -> bool {
    if len < 3 {
        return false;
    }

    if word.ends_with('동') {
        return true;
    }

    // 읍/면/리 collide with common endings ("그러면", "거리"), so only trust
    // them once a city or province has been seen.
    let anchored = region.city.is_some() || region.province.is_some();
    anchored && (word.ends_with('읍') || word.ends_with('면') || word.ends_with('리'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(province: Option<&str>, city: Option<&str>, district: Option<&str>) -> RegionContext {
        RegionContext {
            province: province.map(str::to_string),
            city: city.map(str::to_string),
            district: district.map(str::to_string),
        }
    }

    #[test]
    fn test_city_resolves_province_and_district() {
        assert_eq!(
            extract_region("천안 두정동이에요"),
            Some(region(Some("충청남도"), Some("천안시"), Some("두정동")))
        );
    }

    #[test]
    fn test_metropolitan_gu_with_particle() {
        assert_eq!(
            extract_region("서울 강남구에 살아요"),
            Some(region(Some("서울특별시"), Some("강남구"), None))
        );
        assert_eq!(
            extract_region("부산 사상구입니다"),
            Some(region(Some("부산광역시"), Some("사상구"), None))
        );
    }

    #[test]
    fn test_full_province_and_city_names() {
        assert_eq!(
            extract_region("경기도 수원시 거주 중이에요"),
            Some(region(Some("경기도"), Some("수원시"), None))
        );
    }

    #[test]
    fn test_no_region_in_text() {
        assert_eq!(extract_region("요즘 너무 힘들어요"), None);
        assert_eq!(extract_region(""), None);
    }

    #[test]
    fn test_common_words_are_not_regions() {
        assert_eq!(extract_region("친구랑 봉사활동 하고 싶어요"), None);
        assert_eq!(extract_region("그러면 어떻게 해요"), None);
    }

    #[test]
    fn test_short_gu_is_accepted() {
        assert_eq!(
            extract_region("대전 중구"),
            Some(region(Some("대전광역시"), Some("중구"), None))
        );
    }

    #[test]
    fn test_known_city_wins_over_suffix_guess() {
        assert_eq!(
            extract_region("여자친구는 천안에 살아요"),
            Some(region(Some("충청남도"), Some("천안시"), None))
        );
    }

    #[test]
    fn test_conditional_verb_is_not_myeon() {
        assert_eq!(
            extract_region("서울에 사는데 신청하면 되나요"),
            Some(region(Some("서울특별시"), None, None))
        );
    }

    #[test]
    fn test_common_nouns_are_not_dong() {
        assert_eq!(extract_region("장애아동이 있어요"), None);
        assert_eq!(extract_region("대전인데 일자리가 필요해요").and_then(|r| r.district), None);
    }
}
