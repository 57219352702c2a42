//! Unicode cleanup for Indic scripts.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Whitespace runs, zero-width spaces included
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x{200B}]+").unwrap());

/// Normalize Indic text for matching and tokenisation.
///
/// Composes to NFC, drops ZWJ/ZWNJ (rendering hints that split tokens),
/// collapses whitespace to single spaces and trims.
pub fn normalize_indic(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let composed: String = text
        .nfc()
        .filter(|&c| c != ZERO_WIDTH_NON_JOINER && c != ZERO_WIDTH_JOINER)
        .collect();

    WHITESPACE.replace_all(&composed, " ").trim().to_string()
}
