//! GST state and union territory codes (first two characters of a GSTIN).

use lazy_static::lazy_static;
use std::collections::HashMap;

/// `(code, name)` in code order. Codes 97 and 99 are not places and are
/// left out of address matching by callers that only want states.
pub const GST_STATES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
    ("99", "Centre Jurisdiction"),
];

lazy_static! {
    static ref BY_CODE: HashMap<&'static str, &'static str> = GST_STATES.iter().copied().collect();
}

/// State or territory name for a two-digit GST code.
pub fn state_for_gst_code(code: &str) -> Option<&'static str> {
    BY_CODE.get(code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(state_for_gst_code("29"), Some("Karnataka"));
        assert_eq!(state_for_gst_code("07"), Some("Delhi"));
        assert_eq!(state_for_gst_code("27"), Some("Maharashtra"));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(state_for_gst_code("25"), None);
        assert_eq!(state_for_gst_code("7"), None);
        assert_eq!(state_for_gst_code("00"), None);
    }
}
