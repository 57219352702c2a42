//! Pramana Checksum: check digit engines for Indian identifiers
//!
//! Two independent engines anchor the validators built on top of this crate:
//!
//! - [`verhoeff`]: base-10 check digit over an arbitrary digit string
//!   (Aadhaar carries one as its 12th digit).
//! - [`mod36`]: base-36 check character over a 14-character alphanumeric
//!   base (GSTIN carries one as its 15th character).
//!
//! A plain [`luhn`] check is included for card-like numbers.
//!
//! Generators return `Result<_, ChecksumError>`; validators fail closed and
//! return `false` for malformed input.
//!
//! # Example
//!
//! ```
//! use pramana_checksum::{mod36, verhoeff};
//!
//! assert_eq!(verhoeff::generate("23").unwrap(), 6);
//! assert!(verhoeff::validate("236"));
//!
//! assert_eq!(mod36::check_char("27AAPFR5055K1Z").unwrap(), 'M');
//! assert!(mod36::validate("27AAPFR5055K1ZM"));
//! ```

pub mod base;
pub mod error;
pub mod luhn;
pub mod mod36;
pub mod verhoeff;

pub use error::ChecksumError;
