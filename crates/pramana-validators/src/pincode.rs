//! Pincode: six digits, no leading zero, first two digits a postal region.

use lazy_static::lazy_static;
use pramana_data::region_for_prefix;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref PINCODE: Regex = Regex::new(r"^[1-9][0-9]{5}$").unwrap();
}

pub fn is_valid_pincode(pincode: &str) -> bool {
    region(pincode).is_some()
}

fn region(pincode: &str) -> Option<&'static str> {
    if !PINCODE.is_match(pincode) {
        tracing::debug!(kind = "pincode", reason = "structure", "rejected identifier");
        return None;
    }

    let region = region_for_prefix(&pincode[..2]);
    if region.is_none() {
        tracing::debug!(kind = "pincode", reason = "unknown_region", "rejected identifier");
    }
    region
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeInfo {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

pub fn pincode_info(pincode: &str) -> PincodeInfo {
    let region = region(pincode);
    PincodeInfo {
        valid: region.is_some(),
        region: region.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions() {
        assert!(is_valid_pincode("110001"));
        assert!(is_valid_pincode("400001"));
        assert!(is_valid_pincode("560034"));
    }

    #[test]
    fn test_rejects_invalid_structure() {
        assert!(!is_valid_pincode("010001"));
        assert!(!is_valid_pincode("11000"));
        assert!(!is_valid_pincode("1100012"));
        assert!(!is_valid_pincode("110a01"));
        assert!(!is_valid_pincode(""));
    }

    #[test]
    fn test_rejects_unknown_regions() {
        assert!(!is_valid_pincode("980001"));
        assert!(!is_valid_pincode("550001"));
    }

    #[test]
    fn test_rejects_whitespace_and_separators() {
        assert!(!is_valid_pincode(" 110001"));
        assert!(!is_valid_pincode("110001 "));
        assert!(!is_valid_pincode("110 001"));
        assert!(!is_valid_pincode("110-001"));
    }

    #[test]
    fn test_pincode_info() {
        let info = pincode_info("110001");
        assert!(info.valid);
        assert_eq!(info.region.as_deref(), Some("Delhi"));

        let info = pincode_info("400001");
        assert_eq!(info.region.as_deref(), Some("Maharashtra"));

        let info = pincode_info("980001");
        assert!(!info.valid);
        assert_eq!(info.region, None);
    }
}
