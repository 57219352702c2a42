//! Pramana Data: static reference tables
//!
//! Read-only lookup data used by the format validators. Every table is a
//! process-wide constant built once on first use.
//!
//! The tables are representative rather than exhaustive: the bank list
//! covers the major IFSC prefixes and the pincode map covers postal regions
//! at two-digit granularity.

pub mod banks;
pub mod gst_states;
pub mod pan_categories;
pub mod pincodes;
pub mod state_abbreviations;

pub use banks::{bank_name, is_known_bank};
pub use gst_states::{state_for_gst_code, GST_STATES};
pub use pan_categories::category_description;
pub use pincodes::region_for_prefix;
pub use state_abbreviations::is_state_abbreviation;
