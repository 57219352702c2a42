//! GSTIN: state code, embedded PAN, entity number, the literal `Z`, and a
//! Mod-36 check character.
//!
//! ```text
//! 29 ABCDE1234F 1 Z W
//! |  |          | | +-- check character
//! |  |          | +---- reserved
//! |  |          +------ entity number for this PAN in the state
//! |  +----------------- PAN of the holder
//! +-------------------- GST state code
//! ```

use lazy_static::lazy_static;
use pramana_checksum::mod36;
use pramana_data::state_for_gst_code;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref GSTIN: Regex =
        Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").unwrap();
}

/// Validate a GSTIN: structure first, then the check character.
pub fn is_valid_gstin(gstin: &str) -> bool {
    if !GSTIN.is_match(gstin) {
        tracing::debug!(kind = "gstin", reason = "structure", "rejected identifier");
        return false;
    }

    if !mod36::validate(gstin) {
        tracing::debug!(kind = "gstin", reason = "checksum", "rejected identifier");
        return false;
    }

    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstinInfo {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    /// `None` when the code is well-formed but unassigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_number: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_char: Option<char>,
}

/// Break a GSTIN into its components.
pub fn gstin_info(gstin: &str) -> GstinInfo {
    if !is_valid_gstin(gstin) {
        return GstinInfo {
            valid: false,
            state_code: None,
            state: None,
            pan: None,
            entity_number: None,
            check_char: None,
        };
    }

    // The grammar guarantees 15 ASCII characters
    let state_code = &gstin[0..2];
    GstinInfo {
        valid: true,
        state_code: Some(state_code.to_string()),
        state: state_for_gst_code(state_code).map(str::to_string),
        pan: Some(gstin[2..12].to_string()),
        entity_number: gstin[12..13].chars().next(),
        check_char: gstin[14..15].chars().next(),
    }
}
