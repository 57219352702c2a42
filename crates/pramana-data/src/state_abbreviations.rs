//! Two-letter state and union territory abbreviations used on vehicle
//! registrations, voter IDs and UDID cards.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref STATE_ABBREVIATIONS: HashSet<&'static str> = [
        "AP", "AR", "AS", "BR", "CG", "GA", "GJ", "HR", "HP", "JK", "JH", "KA", "KL", "MP",
        "MH", "MN", "ML", "MZ", "NL", "OR", "PB", "RJ", "SK", "TN", "TS", "TR", "UP", "UK",
        "WB", "AN", "CH", "DN", "DD", "DL", "LD", "PY", "LA",
    ]
    .into_iter()
    .collect();
}

pub fn is_state_abbreviation(code: &str) -> bool {
    STATE_ABBREVIATIONS.contains(code)
}
