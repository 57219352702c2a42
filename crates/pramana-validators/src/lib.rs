//! Pramana Validators: Indian identity and financial identifiers
//!
//! Every validator takes `&str`, never panics, and answers `false` for
//! anything malformed. Validation is structural first (a fixed grammar),
//! then semantic: a check digit for Aadhaar and GSTIN, a reference table
//! for PAN, IFSC and Pincode.
//!
//! A valid identifier is well-formed and checksum-consistent. Whether it
//! was ever issued is a question for the registry, not this crate.
//!
//! # Example
//!
//! ```
//! use pramana_validators::{gstin_info, is_valid_aadhaar, is_valid_pan, IdKind};
//!
//! assert!(is_valid_aadhaar("999999990019"));
//! assert!(is_valid_pan("ABCPE1234F"));
//!
//! let info = gstin_info("29ABCDE1234F1ZW");
//! assert_eq!(info.state.as_deref(), Some("Karnataka"));
//!
//! let kind: IdKind = "ifsc".parse().unwrap();
//! assert!(kind.validate("SBIN0000300"));
//! ```

pub mod aadhaar;
pub mod deep_verify;
pub mod gstin;
pub mod ifsc;
pub mod kind;
pub mod pan;
pub mod pincode;
pub mod schema;

pub use aadhaar::{aadhaar_info, is_valid_aadhaar, mask_aadhaar, AadhaarInfo};
pub use deep_verify::{deep_verify, UnknownVerificationType, VerificationType};
pub use gstin::{gstin_info, is_valid_gstin, GstinInfo};
pub use ifsc::{ifsc_info, is_valid_ifsc, IfscInfo};
pub use kind::{IdKind, UnknownKind};
pub use pan::{is_valid_pan, pan_info, PanInfo};
pub use pincode::{is_valid_pincode, pincode_info, PincodeInfo};
pub use schema::{Aadhaar, Gstin, Ifsc, InvalidIdentifier, Pan, Pincode};
