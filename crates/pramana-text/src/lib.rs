//! Pramana Text: string heuristics for Indian names and addresses
//!
//! Nothing here validates anything. These helpers prepare and compare
//! free text so that it can be fed to the validators or matched against
//! records.
//!
//! - [`normalize_indic`]: NFC composition and invisible-character cleanup
//! - [`phonetic_match`]: similarity of two names under common Indian
//!   spelling variations (`Aditya`/`Adithya`, `Vikram`/`Bikram`)
//! - [`parse_address`]: pincode, state, city and landmark extraction

pub mod address;
pub mod normalize;
pub mod phonetic;

pub use address::{parse_address, AddressObject};
pub use normalize::normalize_indic;
pub use phonetic::{levenshtein, phonetic_code, phonetic_match};
