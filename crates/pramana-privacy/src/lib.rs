//! Pramana Privacy: PII redaction for Indian identifiers
//!
//! Finds Aadhaar numbers, PANs and GSTINs in free text and redacts them.
//! Every candidate the patterns pick up is re-checked with the full
//! validator, so a random 12-digit number whose Verhoeff digit does not
//! match is left alone.
//!
//! # Example
//!
//! ```
//! use pramana_privacy::{scrub_pii, ScrubOptions};
//!
//! let text = "Aadhaar 9999 9999 0019, PAN ABCPE1234F, order 1234 5678 9012";
//! let clean = scrub_pii(text, &ScrubOptions::default());
//! assert_eq!(clean, "Aadhaar [AADHAAR_MASKED], PAN [PAN_MASKED], order 1234 5678 9012");
//! ```

pub mod options;
pub mod scrub;

pub use options::{MaskStyle, ScrubConfigError, ScrubOptions};
pub use scrub::{scan_pii, scrub_pii, PiiKind, PiiMatch};
