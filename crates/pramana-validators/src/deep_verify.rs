//! Structural verification for government IDs without a check digit:
//! voter ID (EPIC), vehicle registration (RC) and UDID.
//!
//! These go past a bare pattern by checking the embedded state prefix.

use lazy_static::lazy_static;
use pramana_data::is_state_abbreviation;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

lazy_static! {
    /// Modern EPIC: three-letter series, seven digits
    static ref EPIC: Regex = Regex::new(r"^[A-Z]{3}[0-9]{7}$").unwrap();

    /// Legacy EPIC: state/constituency/part/serial
    static ref EPIC_LEGACY: Regex = Regex::new(r"^[A-Z]{2}/[0-9]{2}/[0-9]{3}/[0-9]{6}$").unwrap();

    /// State, RTO number, optional series, four-digit number
    static ref RC: Regex = Regex::new(r"^[A-Z]{2}[0-9]{1,2}[A-Z]{0,3}[0-9]{4}$").unwrap();

    static ref RC_SEPARATORS: Regex = Regex::new(r"[- ]").unwrap();

    static ref UDID: Regex = Regex::new(r"^[A-Z]{2}[0-9A-Z]{16}$").unwrap();
}

/// Which kind of ID [`deep_verify`] should check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationType {
    VoterId,
    Rc,
    Udid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown verification type: {0}")]
pub struct UnknownVerificationType(pub String);

impl VerificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VoterId => "VOTER_ID",
            Self::Rc => "RC",
            Self::Udid => "UDID",
        }
    }
}

impl fmt::Display for VerificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationType {
    type Err = UnknownVerificationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VOTER_ID" => Ok(Self::VoterId),
            "RC" => Ok(Self::Rc),
            "UDID" => Ok(Self::Udid),
            _ => Err(UnknownVerificationType(s.to_string())),
        }
    }
}

/// Verify `id` as the given kind. Input is trimmed and upper-cased first.
pub fn deep_verify(id: &str, kind: VerificationType) -> bool {
    let clean = id.trim().to_uppercase();
    if clean.is_empty() {
        return false;
    }

    let verified = match kind {
        VerificationType::VoterId => verify_voter_id(&clean),
        VerificationType::Rc => verify_rc(&clean),
        VerificationType::Udid => verify_udid(&clean),
    };

    if !verified {
        tracing::debug!(kind = %kind, "deep verification failed");
    }
    verified
}

fn verify_voter_id(id: &str) -> bool {
    if EPIC.is_match(id) {
        return true;
    }

    EPIC_LEGACY.is_match(id) && is_state_abbreviation(&id[..2])
}

fn verify_rc(id: &str) -> bool {
    let clean = RC_SEPARATORS.replace_all(id, "");
    RC.is_match(&clean) && is_state_abbreviation(&clean[..2])
}

fn verify_udid(id: &str) -> bool {
    UDID.is_match(id) && is_state_abbreviation(&id[..2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voter_id() {
        assert!(deep_verify("ABC1234567", VerificationType::VoterId));
        assert!(deep_verify("  abc1234567 ", VerificationType::VoterId));
        assert!(deep_verify("DL/01/023/123456", VerificationType::VoterId));
        assert!(!deep_verify("XX/01/023/123456", VerificationType::VoterId));
        assert!(!deep_verify("AB1234567", VerificationType::VoterId));
    }

    #[test]
    fn test_rc() {
        assert!(deep_verify("DL-01-C-1234", VerificationType::Rc));
        assert!(deep_verify("MH 12 AB 1234", VerificationType::Rc));
        assert!(deep_verify("dl1c1234", VerificationType::Rc));
        assert!(!deep_verify("XX01AB1234", VerificationType::Rc));
        assert!(!deep_verify("DL01ABCD1234", VerificationType::Rc));
        assert!(!deep_verify("DL", VerificationType::Rc));
    }

    #[test]
    fn test_udid() {
        assert!(deep_verify("MH0110119900000001", VerificationType::Udid));
        assert!(!deep_verify("XX0110119900000001", VerificationType::Udid));
        assert!(!deep_verify("MH011011990000001", VerificationType::Udid));
    }

    #[test]
    fn test_empty_input() {
        assert!(!deep_verify("", VerificationType::VoterId));
        assert!(!deep_verify("   ", VerificationType::Udid));
    }

    #[test]
    fn test_verification_type_parsing() {
        assert_eq!("voter_id".parse::<VerificationType>(), Ok(VerificationType::VoterId));
        assert_eq!("RC".parse::<VerificationType>(), Ok(VerificationType::Rc));
        assert_eq!(
            "passport".parse::<VerificationType>(),
            Err(UnknownVerificationType("passport".to_string()))
        );
        assert_eq!(
            UnknownVerificationType("passport".to_string()).to_string(),
            "unknown verification type: passport"
        );
        assert_eq!(VerificationType::Udid.to_string(), "UDID");
    }
}
