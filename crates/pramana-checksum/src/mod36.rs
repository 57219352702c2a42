//! GSTIN Mod-36 check character.
//!
//! For each of the 14 base characters (left to right, position `i`), the
//! symbol value is multiplied by `(i % 2) + 1` and the product's base-36
//! quotient and remainder are both added to the running sum. The check
//! value is `(36 - sum % 36) % 36`.
//!
//! Weight 1 sits at position 0. Real GSTINs only verify with exactly this
//! weighting and fold.

use crate::base::{base36_value, base36_values, BASE36_ALPHABET};
use crate::error::ChecksumError;

/// Characters covered by the check character.
pub const BASE_LEN: usize = 14;

/// Characters in a full identifier, check character included.
pub const FULL_LEN: usize = BASE_LEN + 1;

const RADIX: u32 = 36;

/// Compute the check value (0-35) for a 14-character base.
///
/// Letters are accepted in either case. Wrong length or any character
/// outside `0-9A-Z` is an error.
pub fn generate(base: &str) -> Result<u8, ChecksumError> {
    let values = base36_values(base, BASE_LEN)?;

    let sum: u32 = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let product = u32::from(value) * (i as u32 % 2 + 1);
            product / RADIX + product % RADIX
        })
        .sum();

    Ok(((RADIX - sum % RADIX) % RADIX) as u8)
}

/// Compute the check character for a 14-character base.
pub fn check_char(base: &str) -> Result<char, ChecksumError> {
    let value = generate(base)?;
    Ok(BASE36_ALPHABET[value as usize] as char)
}

/// Check a 15-character string whose last character is its Mod-36 check
/// character. Case-insensitive; malformed input is invalid.
pub fn validate(full: &str) -> bool {
    let chars: Vec<char> = full.chars().collect();
    if chars.len() != FULL_LEN {
        return false;
    }

    let base: String = chars[..BASE_LEN].iter().collect();
    let supplied = match base36_value(chars[BASE_LEN]) {
        Some(value) => value,
        None => return false,
    };

    match generate(&base) {
        Ok(expected) => expected == supplied,
        Err(_) => false,
    }
}
