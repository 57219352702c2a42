//! Luhn (mod 10) check for card numbers, IMEIs and the like.

use crate::base::decimal_digits;

/// Validate a digit string with a trailing Luhn check digit.
///
/// Only bare ASCII digits are accepted; separators and whitespace make the
/// input invalid.
pub fn validate(number: &str) -> bool {
    let digits = match decimal_digits(number) {
        Ok(digits) => digits,
        Err(_) => return false,
    };

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}
