//! PAN: five letters, four digits, one letter. The fourth letter is the
//! holder category.

use lazy_static::lazy_static;
use pramana_data::category_description;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref PAN: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap();
}

/// Validate a Permanent Account Number. Uppercase only.
pub fn is_valid_pan(pan: &str) -> bool {
    if !PAN.is_match(pan) {
        tracing::debug!(kind = "pan", reason = "structure", "rejected identifier");
        return false;
    }

    if category(pan).and_then(category_description).is_none() {
        tracing::debug!(kind = "pan", reason = "category", "rejected identifier");
        return false;
    }

    true
}

fn category(pan: &str) -> Option<char> {
    pan.chars().nth(3)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanInfo {
    pub valid: bool,
    /// Holder category letter (`P`, `C`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_desc: Option<String>,
    /// Fifth character: initial of the surname for persons, of the name
    /// otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_initial: Option<char>,
}

/// Extract holder metadata from a PAN.
pub fn pan_info(pan: &str) -> PanInfo {
    if !is_valid_pan(pan) {
        return PanInfo {
            valid: false,
            category: None,
            category_desc: None,
            name_initial: None,
        };
    }

    let category = category(pan);
    PanInfo {
        valid: true,
        category,
        category_desc: category.and_then(category_description).map(str::to_string),
        name_initial: pan.chars().nth(4),
    }
}
