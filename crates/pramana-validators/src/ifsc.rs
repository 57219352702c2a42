//! IFSC: four-letter bank code, a literal `0`, six-character branch code.

use lazy_static::lazy_static;
use pramana_data::{bank_name, is_known_bank};
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref IFSC: Regex = Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").unwrap();
}

/// Validate an IFSC against the grammar and the known bank prefixes.
pub fn is_valid_ifsc(ifsc: &str) -> bool {
    if !IFSC.is_match(ifsc) {
        tracing::debug!(kind = "ifsc", reason = "structure", "rejected identifier");
        return false;
    }

    if !is_known_bank(&ifsc[..4]) {
        tracing::debug!(kind = "ifsc", reason = "unknown_bank", "rejected identifier");
        return false;
    }

    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfscInfo {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
}

pub fn ifsc_info(ifsc: &str) -> IfscInfo {
    if !is_valid_ifsc(ifsc) {
        return IfscInfo {
            valid: false,
            bank_code: None,
            bank: None,
            branch_code: None,
        };
    }

    let bank_code = &ifsc[..4];
    IfscInfo {
        valid: true,
        bank_code: Some(bank_code.to_string()),
        bank: bank_name(bank_code).map(str::to_string),
        branch_code: Some(ifsc[5..].to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ifsc() {
        assert!(is_valid_ifsc("SBIN0000300"));
        assert!(is_valid_ifsc("HDFC0001234"));
    }

    #[test]
    fn test_rejects_invalid_structure() {
        assert!(!is_valid_ifsc("SBI00000300"));
        assert!(!is_valid_ifsc("SBIN000030"));
        assert!(!is_valid_ifsc("SBIN1000300"));
        assert!(!is_valid_ifsc("sbin0000300"));
        assert!(!is_valid_ifsc(""));
    }

    #[test]
    fn test_rejects_unknown_bank() {
        assert!(!is_valid_ifsc("ZZZZ0000300"));
    }

    #[test]
    fn test_rejects_whitespace_and_separators() {
        assert!(!is_valid_ifsc(" SBIN0000300"));
        assert!(!is_valid_ifsc("SBIN0000300 "));
        assert!(!is_valid_ifsc("SBIN 0000300"));
        assert!(!is_valid_ifsc("SBIN-0000-300"));
        assert!(!is_valid_ifsc("SBIN 0000 300"));
    }

    #[test]
    fn test_ifsc_info() {
        let info = ifsc_info("SBIN0000300");
        assert!(info.valid);
        assert_eq!(info.bank_code.as_deref(), Some("SBIN"));
        assert_eq!(info.bank.as_deref(), Some("State Bank of India"));
        assert_eq!(info.branch_code.as_deref(), Some("000300"));

        assert!(!ifsc_info("ZZZZ0000300").valid);
    }
}
