//! Lightweight address parsing.
//!
//! Pulls out the parts of a free-form Indian address that can be found
//! without a gazetteer: the pincode, the state, a handful of metro
//! cities, and landmark clauses ("near ...", "opp ...").

use once_cell::sync::Lazy;
use pramana_data::GST_STATES;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Word boundaries are ASCII-only so that Indic text directly next to a
// pincode or a place name does not hide it.
static PINCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\b)[0-9]{6}(?-u:\b)").unwrap());

static CLAUSE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,.\n]+").unwrap());

/// GST codes that are jurisdictions, not places.
const NON_TERRITORIAL_CODES: &[&str] = &["97", "99"];

static STATES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    GST_STATES
        .iter()
        .filter(|(code, _)| !NON_TERRITORIAL_CODES.contains(code))
        .map(|&(_, name)| (name, word_pattern(name)))
        .collect()
});

const CITIES: &[(&str, &str)] = &[
    ("mumbai", "Mumbai"),
    ("delhi", "Delhi"),
    ("bangalore", "Bangalore"),
    ("bengaluru", "Bengaluru"),
    ("chennai", "Chennai"),
    ("kolkata", "Kolkata"),
    ("hyderabad", "Hyderabad"),
    ("pune", "Pune"),
    ("ahmedabad", "Ahmedabad"),
    ("jaipur", "Jaipur"),
    ("lucknow", "Lucknow"),
];

static CITY_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    CITIES
        .iter()
        .map(|&(key, display)| (display, word_pattern(key)))
        .collect()
});

const LANDMARK_KEYWORDS: &[&str] = &["near", "opposite", "opp", "behind", "adj", "adjacent", "next to"];

fn word_pattern(phrase: &str) -> Regex {
    Regex::new(&format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(phrase))).unwrap()
}

/// Parts recovered from an address. Anything not found is `None`/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressObject {
    pub pincode: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub landmarks: Vec<String>,
}

/// Parse an address heuristically. The first match wins for each field.
pub fn parse_address(address: &str) -> AddressObject {
    let mut result = AddressObject::default();
    if address.is_empty() {
        return result;
    }

    result.pincode = PINCODE.find(address).map(|m| m.as_str().to_string());

    result.state = STATES
        .iter()
        .find(|(_, pattern)| pattern.is_match(address))
        .map(|(name, _)| name.to_string());

    result.city = CITY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(address))
        .map(|(name, _)| name.to_string());

    result.landmarks = CLAUSE_SEPARATOR
        .split(address)
        .map(str::trim)
        .filter(|clause| is_landmark(clause))
        .map(str::to_string)
        .collect();

    result
}

fn is_landmark(clause: &str) -> bool {
    let lower = clause.to_lowercase();
    LANDMARK_KEYWORDS.iter().any(|kw| {
        lower.starts_with(&format!("{} ", kw)) || lower.contains(&format!(" {} ", kw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_address() {
        let parsed = parse_address(
            "Flat 12, Near City Mall, MG Road, Bengaluru, Karnataka 560001",
        );
        assert_eq!(parsed.pincode.as_deref(), Some("560001"));
        assert_eq!(parsed.state.as_deref(), Some("Karnataka"));
        assert_eq!(parsed.city.as_deref(), Some("Bengaluru"));
        assert_eq!(parsed.landmarks, vec!["Near City Mall"]);
    }

    #[test]
    fn test_case_insensitive_state_and_city() {
        let parsed = parse_address("12 park street, kolkata, west bengal");
        assert_eq!(parsed.state.as_deref(), Some("West Bengal"));
        assert_eq!(parsed.city.as_deref(), Some("Kolkata"));
        assert_eq!(parsed.pincode, None);
    }

    #[test]
    fn test_multi_word_state() {
        let parsed = parse_address("House 4, Adyar, Chennai 600020, Tamil Nadu");
        assert_eq!(parsed.state.as_deref(), Some("Tamil Nadu"));
        assert_eq!(parsed.pincode.as_deref(), Some("600020"));
    }

    #[test]
    fn test_state_must_be_a_whole_word() {
        // "Goan" is not "Goa"
        let parsed = parse_address("Goan Fish Curry House");
        assert_eq!(parsed.state, None);
    }

    #[test]
    fn test_pincode_must_be_six_digits_alone() {
        assert_eq!(parse_address("Plot 1234567").pincode, None);
        assert_eq!(parse_address("PIN 110001").pincode.as_deref(), Some("110001"));
    }

    #[test]
    fn test_parts_written_against_devanagari() {
        let parsed = parse_address("पता Koramangala बेंगलुरु Bengaluru, कर्नाटकKarnataka560034");
        assert_eq!(parsed.pincode, None);

        let parsed = parse_address("पिन560034, राज्यKarnataka, शहरBengaluru");
        assert_eq!(parsed.pincode.as_deref(), Some("560034"));
        assert_eq!(parsed.state.as_deref(), Some("Karnataka"));
        assert_eq!(parsed.city.as_deref(), Some("Bengaluru"));
    }

    #[test]
    fn test_landmarks() {
        let parsed = parse_address(
            "Shop 3, Opposite Railway Station\nBehind Post Office, Lane next to temple",
        );
        assert_eq!(
            parsed.landmarks,
            vec![
                "Opposite Railway Station",
                "Behind Post Office",
                "Lane next to temple",
            ]
        );
    }

    #[test]
    fn test_empty_address() {
        assert_eq!(parse_address(""), AddressObject::default());
    }
}
