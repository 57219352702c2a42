//! Numeric-base helpers shared by the engines.
//!
//! Both engines validate the whole input before any arithmetic runs, so
//! the conversions here either produce the full value sequence or the
//! first offending character.

use crate::error::ChecksumError;

/// Base-36 alphabet: `0`-`9` map to 0-9, `A`-`Z` map to 10-35.
pub const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Value of an ASCII decimal digit.
pub fn decimal_value(c: char) -> Option<u8> {
    c.is_ascii_digit().then(|| c as u8 - b'0')
}

/// Value of a base-36 symbol. Lowercase letters are folded to uppercase.
pub fn base36_value(c: char) -> Option<u8> {
    match c.to_ascii_uppercase() {
        d @ '0'..='9' => Some(d as u8 - b'0'),
        l @ 'A'..='Z' => Some(l as u8 - b'A' + 10),
        _ => None,
    }
}

/// Symbol for a base-36 value, `None` past 35.
pub fn base36_char(value: u8) -> Option<char> {
    BASE36_ALPHABET.get(value as usize).map(|&b| b as char)
}

/// Convert a non-empty string of ASCII digits into digit values.
pub fn decimal_digits(input: &str) -> Result<Vec<u8>, ChecksumError> {
    if input.is_empty() {
        return Err(ChecksumError::Empty);
    }

    input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            decimal_value(character).ok_or(ChecksumError::InvalidCharacter { character, position })
        })
        .collect()
}

/// Convert a string of exactly `expected_len` base-36 symbols into values.
pub fn base36_values(input: &str, expected_len: usize) -> Result<Vec<u8>, ChecksumError> {
    let actual = input.chars().count();
    if actual != expected_len {
        return Err(ChecksumError::InvalidLength {
            expected: expected_len,
            actual,
        });
    }

    input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            base36_value(character).ok_or(ChecksumError::InvalidCharacter { character, position })
        })
        .collect()
}
