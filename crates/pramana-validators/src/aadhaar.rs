//! Aadhaar: 12 digits, never starting with 0 or 1, last digit a Verhoeff
//! check digit.

use lazy_static::lazy_static;
use pramana_checksum::verhoeff;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref AADHAAR: Regex = Regex::new(r"^[0-9]{12}$").unwrap();
}

/// Validate an Aadhaar number. No separators or whitespace are tolerated.
pub fn is_valid_aadhaar(aadhaar: &str) -> bool {
    if !AADHAAR.is_match(aadhaar) {
        tracing::debug!(kind = "aadhaar", reason = "structure", "rejected identifier");
        return false;
    }

    if aadhaar.starts_with(&['0', '1'][..]) {
        tracing::debug!(kind = "aadhaar", reason = "leading_digit", "rejected identifier");
        return false;
    }

    if !verhoeff::validate(aadhaar) {
        tracing::debug!(kind = "aadhaar", reason = "checksum", "rejected identifier");
        return false;
    }

    true
}

/// Display form that keeps only the last four digits: `XXXX XXXX 0019`.
///
/// Returns `None` for anything that is not a valid Aadhaar.
pub fn mask_aadhaar(aadhaar: &str) -> Option<String> {
    if !is_valid_aadhaar(aadhaar) {
        return None;
    }
    Some(format!("XXXX XXXX {}", &aadhaar[8..]))
}

/// What can be said about an Aadhaar number without a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AadhaarInfo {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked: Option<String>,
}

pub fn aadhaar_info(aadhaar: &str) -> AadhaarInfo {
    let masked = mask_aadhaar(aadhaar);
    AadhaarInfo {
        valid: masked.is_some(),
        masked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_aadhaar() -> String {
        verhoeff::append("99999999001").unwrap()
    }

    #[test]
    fn test_valid_aadhaar() {
        assert_eq!(valid_aadhaar(), "999999990019");
        assert!(is_valid_aadhaar(&valid_aadhaar()));
        assert!(is_valid_aadhaar(&verhoeff::append("23456789012").unwrap()));
    }

    #[test]
    fn test_rejects_leading_zero_or_one() {
        // Both are Verhoeff-valid, only the leading digit is wrong
        let zero = verhoeff::append("09999999001").unwrap();
        let one = verhoeff::append("19999999001").unwrap();
        assert!(verhoeff::validate(&zero));
        assert!(!is_valid_aadhaar(&zero));
        assert!(!is_valid_aadhaar(&one));
    }

    #[test]
    fn test_rejects_invalid_length() {
        assert!(!is_valid_aadhaar("99999999001"));
        assert!(!is_valid_aadhaar("9999999900199"));
        assert!(!is_valid_aadhaar(""));
    }

    #[test]
    fn test_rejects_invalid_checksum() {
        assert!(!is_valid_aadhaar("999999990018"));
        assert!(!is_valid_aadhaar("222222220023"));
    }

    #[test]
    fn test_rejects_whitespace_and_separators() {
        let valid = valid_aadhaar();
        assert!(!is_valid_aadhaar(&format!(" {}", valid)));
        assert!(!is_valid_aadhaar(&format!("{} ", valid)));
        assert!(!is_valid_aadhaar(&format!("{} {}", &valid[..6], &valid[6..])));
        assert!(!is_valid_aadhaar("9999-9999-0019"));
        assert!(!is_valid_aadhaar("9999 9999 0019"));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Devanagari digits are Unicode digits but not Aadhaar digits
        assert!(!is_valid_aadhaar("\u{096F}\u{096F}\u{096F}\u{096F}\u{096F}\u{096F}\u{096F}\u{096F}\u{0966}\u{0966}\u{0967}\u{096F}"));
    }

    #[test]
    fn test_mask_and_info() {
        assert_eq!(mask_aadhaar("999999990019").as_deref(), Some("XXXX XXXX 0019"));
        assert_eq!(mask_aadhaar("999999990018"), None);

        let info = aadhaar_info("999999990019");
        assert!(info.valid);
        assert_eq!(info.masked.as_deref(), Some("XXXX XXXX 0019"));
        assert!(!aadhaar_info("123").valid);
    }
}
