//! Validated identifier newtypes.
//!
//! Each type can only hold a value that passed its validator, so a
//! `Gstin` in a struct field is proof of a well-formed GSTIN. With serde
//! the check runs during deserialization:
//!
//! ```
//! use pramana_validators::Pan;
//!
//! #[derive(serde::Deserialize)]
//! struct Vendor {
//!     pan: Pan,
//! }
//!
//! let ok: Result<Vendor, _> = serde_json::from_str(r#"{ "pan": "ABCPE1234F" }"#);
//! assert!(ok.is_ok());
//!
//! let err = serde_json::from_str::<Vendor>(r#"{ "pan": "ABCDE1234F" }"#).err().unwrap();
//! assert!(err.to_string().starts_with("Invalid PAN Number"));
//! ```

use crate::kind::IdKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A value was rejected by its identifier's validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {}", .kind.label())]
pub struct InvalidIdentifier {
    pub kind: IdKind,
}

macro_rules! validated_id {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const KIND: IdKind = $kind;

            pub fn parse(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
                let value = value.into();
                if Self::KIND.validate(&value) {
                    Ok(Self(value))
                } else {
                    Err(InvalidIdentifier { kind: Self::KIND })
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidIdentifier;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl FromStr for $name {
            type Err = InvalidIdentifier;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_id!(
    /// A Verhoeff-valid 12-digit Aadhaar number.
    Aadhaar => IdKind::Aadhaar
);
validated_id!(
    /// A PAN with a known holder category.
    Pan => IdKind::Pan
);
validated_id!(
    /// A GSTIN with a matching check character.
    Gstin => IdKind::Gstin
);
validated_id!(
    /// An IFSC with a known bank prefix.
    Ifsc => IdKind::Ifsc
);
validated_id!(
    /// A pincode in a known postal region.
    Pincode => IdKind::Pincode
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Pan::parse("ABCPE1234F").unwrap().as_str(), "ABCPE1234F");
        assert!(Aadhaar::parse("999999990019").is_ok());
        assert!("27AAPFR5055K1ZM".parse::<Gstin>().is_ok());
        assert!(Ifsc::try_from("SBIN0000300".to_string()).is_ok());
        assert_eq!(Pincode::parse("110001").unwrap().to_string(), "110001");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(Pan::parse("ABCDE1234F").unwrap_err().to_string(), "Invalid PAN Number");
        assert_eq!(Aadhaar::parse("123").unwrap_err().to_string(), "Invalid Aadhaar Number");
        assert_eq!(Gstin::parse("").unwrap_err().to_string(), "Invalid GSTIN Number");
        assert_eq!(Ifsc::parse("ZZZZ0000300").unwrap_err().to_string(), "Invalid IFSC Code");
        assert_eq!(Pincode::parse("980001").unwrap_err().to_string(), "Invalid Pincode");
    }

    #[test]
    fn test_serde_round_trip() {
        let gstin = Gstin::parse("29ABCDE1234F1ZW").unwrap();
        let json = serde_json::to_string(&gstin).unwrap();
        assert_eq!(json, "\"29ABCDE1234F1ZW\"");
        let back: Gstin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gstin);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let err = serde_json::from_str::<Ifsc>("\"SBIN1000300\"").unwrap_err();
        assert!(err.to_string().contains("Invalid IFSC Code"));
    }
}
