//! Identifier kinds and by-name dispatch.

use crate::{is_valid_aadhaar, is_valid_gstin, is_valid_ifsc, is_valid_pan, is_valid_pincode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The identifier families this crate validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    Aadhaar,
    Pan,
    Gstin,
    Ifsc,
    Pincode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown identifier kind: {0}")]
pub struct UnknownKind(pub String);

impl IdKind {
    pub const ALL: [IdKind; 5] = [
        IdKind::Aadhaar,
        IdKind::Pan,
        IdKind::Gstin,
        IdKind::Ifsc,
        IdKind::Pincode,
    ];

    /// Lowercase name, as used in URLs and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::Gstin => "gstin",
            Self::Ifsc => "ifsc",
            Self::Pincode => "pincode",
        }
    }

    /// Human-facing name, as used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar Number",
            Self::Pan => "PAN Number",
            Self::Gstin => "GSTIN Number",
            Self::Ifsc => "IFSC Code",
            Self::Pincode => "Pincode",
        }
    }

    /// Run this kind's validator.
    pub fn validate(&self, value: &str) -> bool {
        match self {
            Self::Aadhaar => is_valid_aadhaar(value),
            Self::Pan => is_valid_pan(value),
            Self::Gstin => is_valid_gstin(value),
            Self::Ifsc => is_valid_ifsc(value),
            Self::Pincode => is_valid_pincode(value),
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
