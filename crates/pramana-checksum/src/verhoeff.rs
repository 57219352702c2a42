//! Verhoeff check digit.
//!
//! Built on the dihedral group D5: `D` is its multiplication table, `P`
//! holds the eight powers of one fixed permutation (position `i` uses
//! `P[i % 8]`), and `INV` gives each element's inverse under `D`.
//!
//! The scheme catches every single-digit substitution and every adjacent
//! transposition, which a weighted mod-10 sum cannot guarantee.

use crate::base::decimal_digits;
use crate::error::ChecksumError;

const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Fold digits right to left through `D` and `P`.
///
/// Without a check digit every position shifts by one, as if the digit
/// that is about to be appended already occupied position 0.
fn checksum(digits: &[u8], includes_check_digit: bool) -> u8 {
    let offset = usize::from(!includes_check_digit);

    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |c, (i, &digit)| {
            D[c as usize][P[(i + offset) % 8][digit as usize] as usize]
        })
}

/// Compute the check digit to append to `base`.
///
/// `base` must be a non-empty string of ASCII digits with no sign,
/// separators or surrounding whitespace.
pub fn generate(base: &str) -> Result<u8, ChecksumError> {
    let digits = decimal_digits(base)?;
    Ok(INV[checksum(&digits, false) as usize])
}

/// Return `base` with its check digit appended.
pub fn append(base: &str) -> Result<String, ChecksumError> {
    let check = generate(base)?;
    Ok(format!("{}{}", base, check))
}

/// Check a digit string whose last digit is a Verhoeff check digit.
///
/// Malformed input (empty, non-digit, whitespace) is simply invalid.
pub fn validate(full: &str) -> bool {
    match decimal_digits(full) {
        Ok(digits) => checksum(&digits, true) == 0,
        Err(_) => false,
    }
}
