//! Postal regions keyed by the first two digits of a pincode.
//!
//! Prefixes 90-99 belong to the Army Postal Service and are not regions.

use lazy_static::lazy_static;
use std::collections::HashMap;

const REGIONS: &[(&[&str], &str)] = &[
    (&["11"], "Delhi"),
    (&["12", "13"], "Haryana"),
    (&["14", "15", "16"], "Punjab"),
    (&["17"], "Himachal Pradesh"),
    (&["18", "19"], "Jammu and Kashmir"),
    (&["20", "21", "22", "23", "25", "27", "28"], "Uttar Pradesh"),
    (&["24", "26"], "Uttar Pradesh and Uttarakhand"),
    (&["30", "31", "32", "33", "34"], "Rajasthan"),
    (&["36", "37", "38", "39"], "Gujarat"),
    (&["40", "41", "42", "43", "44"], "Maharashtra"),
    (&["45", "46", "47", "48"], "Madhya Pradesh"),
    (&["49"], "Chhattisgarh"),
    (&["50"], "Telangana"),
    (&["51", "52", "53"], "Andhra Pradesh"),
    (&["56", "57", "58", "59"], "Karnataka"),
    (&["60", "61", "62", "63", "64"], "Tamil Nadu"),
    (&["67", "68", "69"], "Kerala"),
    (&["70", "71", "72", "73", "74"], "West Bengal"),
    (&["75", "76", "77"], "Odisha"),
    (&["78"], "Assam"),
    (&["79"], "North Eastern States"),
    (&["80", "84", "85"], "Bihar"),
    (&["81", "82", "83"], "Jharkhand"),
];

lazy_static! {
    static ref PINCODE_REGIONS: HashMap<&'static str, &'static str> = REGIONS
        .iter()
        .flat_map(|(prefixes, region)| prefixes.iter().map(move |p| (*p, *region)))
        .collect();
}

/// Region for a two-digit pincode prefix.
pub fn region_for_prefix(prefix: &str) -> Option<&'static str> {
    PINCODE_REGIONS.get(prefix).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions() {
        assert_eq!(region_for_prefix("11"), Some("Delhi"));
        assert_eq!(region_for_prefix("40"), Some("Maharashtra"));
        assert_eq!(region_for_prefix("56"), Some("Karnataka"));
    }

    #[test]
    fn test_unmapped_prefixes() {
        assert_eq!(region_for_prefix("98"), None);
        assert_eq!(region_for_prefix("54"), None);
        assert_eq!(region_for_prefix("01"), None);
    }
}
