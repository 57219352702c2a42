//! Pattern-then-verify PII scanning.
//!
//! Passes run in a fixed order (Aadhaar, PAN, GSTIN), each over the output
//! of the previous one. A candidate is only redacted when its validator
//! accepts it.

use crate::options::{MaskStyle, ScrubOptions};
use lazy_static::lazy_static;
use pramana_validators::{is_valid_aadhaar, is_valid_gstin, is_valid_pan};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

// Boundaries are ASCII-only: Indic letters count as word characters under
// Unicode `\b`, which would hide an identifier written against them.
lazy_static! {
    /// 12 digits, optionally grouped 4-4-4 by spaces or hyphens
    static ref AADHAAR_CANDIDATE: Regex =
        Regex::new(r"(?-u:\b)[0-9]{4}[ -]?[0-9]{4}[ -]?[0-9]{4}(?-u:\b)").unwrap();

    static ref PAN_CANDIDATE: Regex =
        Regex::new(r"(?-u:\b)[A-Z]{5}[0-9]{4}[A-Z](?-u:\b)").unwrap();

    static ref GSTIN_CANDIDATE: Regex =
        Regex::new(r"(?-u:\b)[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z](?-u:\b)").unwrap();
}

/// Kind of identifier found in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiiKind {
    Aadhaar,
    Pan,
    Gstin,
}

impl PiiKind {
    fn placeholder(&self) -> &'static str {
        match self {
            Self::Aadhaar => "[AADHAAR_MASKED]",
            Self::Pan => "[PAN_MASKED]",
            Self::Gstin => "[GSTIN_MASKED]",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Aadhaar => &AADHAAR_CANDIDATE,
            Self::Pan => &PAN_CANDIDATE,
            Self::Gstin => &GSTIN_CANDIDATE,
        }
    }

    fn verify(&self, candidate: &str) -> bool {
        match self {
            Self::Aadhaar => {
                let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();
                is_valid_aadhaar(&digits)
            }
            Self::Pan => is_valid_pan(candidate),
            Self::Gstin => is_valid_gstin(candidate),
        }
    }
}

/// A verified identifier located in the input, as byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiMatch {
    pub kind: PiiKind,
    pub start: usize,
    pub end: usize,
}

fn enabled_passes(opts: &ScrubOptions) -> Vec<PiiKind> {
    let mut passes = Vec::with_capacity(3);
    if opts.scrub_aadhaar {
        passes.push(PiiKind::Aadhaar);
    }
    if opts.scrub_pan {
        passes.push(PiiKind::Pan);
    }
    if opts.scrub_gstin {
        passes.push(PiiKind::Gstin);
    }
    passes
}

fn redact(kind: PiiKind, matched: &str, opts: &ScrubOptions) -> String {
    match opts.style {
        MaskStyle::Placeholder => kind.placeholder().to_string(),
        MaskStyle::Mask => matched
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { opts.mask_char } else { c })
            .collect(),
    }
}

/// Redact every verified Aadhaar, PAN and GSTIN in `text`.
pub fn scrub_pii(text: &str, opts: &ScrubOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut processed = text.to_string();
    for kind in enabled_passes(opts) {
        let mut redacted = 0usize;
        let next = kind
            .pattern()
            .replace_all(&processed, |caps: &Captures| {
                let matched = &caps[0];
                if kind.verify(matched) {
                    redacted += 1;
                    redact(kind, matched, opts)
                } else {
                    matched.to_string()
                }
            })
            .into_owned();
        processed = next;

        if redacted > 0 {
            tracing::debug!(kind = ?kind, count = redacted, "redacted PII");
        }
    }

    processed
}

/// Locate verified identifiers without rewriting the text.
///
/// Matches are reported against the original input, ordered by position.
pub fn scan_pii(text: &str, opts: &ScrubOptions) -> Vec<PiiMatch> {
    let mut found: Vec<PiiMatch> = enabled_passes(opts)
        .into_iter()
        .flat_map(|kind| {
            kind.pattern()
                .find_iter(text)
                .filter(move |m| kind.verify(m.as_str()))
                .map(move |m| PiiMatch {
                    kind,
                    start: m.start(),
                    end: m.end(),
                })
        })
        .collect();

    found.sort_by_key(|m| m.start);
    found
}
