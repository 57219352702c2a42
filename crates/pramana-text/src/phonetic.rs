//! Soundex-style phonetic codes tuned for Indian names.
//!
//! Romanised Indian names vary in predictable ways: aspirated consonants
//! written with or without `h`, `v`/`w`/`b` used interchangeably, long
//! vowels doubled or not. The code folds those variations away and keeps
//! the consonant skeleton.

use once_cell::sync::Lazy;
use regex::Regex;

static DIPHTHONG: Lazy<Regex> = Lazy::new(|| Regex::new("AU|OU").unwrap());

/// Ordered rewrites; later rules see the output of earlier ones.
const REWRITES: &[(&str, &str)] = &[
    ("PH", "F"),
    ("BH", "B"),
    ("TH", "T"),
    ("SH", "S"),
    ("X", "K"),
    ("KS", "K"),
    ("V", "B"),
    ("W", "B"),
    ("Z", "J"),
    ("EE", "I"),
    ("OO", "U"),
];

/// Phonetic code for one word. Empty when the word has no ASCII letters.
pub fn phonetic_code(word: &str) -> String {
    let mut code: String = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if code.is_empty() {
        return code;
    }

    for (from, to) in REWRITES {
        code = code.replace(from, to);
    }
    code = DIPHTHONG.replace_all(&code, "O").into_owned();

    let mut collapsed = String::with_capacity(code.len());
    for c in code.chars() {
        if !collapsed.ends_with(c) {
            collapsed.push(c);
        }
    }

    let mut chars = collapsed.chars();
    let first = match chars.next() {
        Some(first) => first,
        None => return String::new(),
    };

    std::iter::once(first)
        .chain(chars.filter(|c| !matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')))
        .collect()
}

/// Phonetic similarity of two names, from 0.0 (unrelated or empty) to 1.0
/// (same code).
pub fn phonetic_match(a: &str, b: &str) -> f64 {
    let code_a = phonetic_code(a);
    let code_b = phonetic_code(b);

    if code_a.is_empty() || code_b.is_empty() {
        return 0.0;
    }
    if code_a == code_b {
        return 1.0;
    }

    let distance = levenshtein(&code_a, &code_b);
    let max_len = code_a.chars().count().max(code_b.chars().count());
    1.0 - distance as f64 / max_len as f64
}

/// Edit distance (insert, delete, substitute) between two strings, by char.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(phonetic_code("Aditya"), "ADT");
        assert_eq!(phonetic_code("Bhaskar"), "BSKR");
        assert_eq!(phonetic_code("Phaneesh"), "FNS");
        assert_eq!(phonetic_code("Vasudev"), "BSDB");
        assert_eq!(phonetic_code("Oommen"), "UMN");
        assert_eq!(phonetic_code("Saurabh"), "SRB");
    }

    #[test]
    fn test_code_ignores_non_letters() {
        assert_eq!(phonetic_code("  d'souza-1 "), phonetic_code("DSOUZA"));
        assert_eq!(phonetic_code("123"), "");
        assert_eq!(phonetic_code(""), "");
    }

    #[test]
    fn test_spelling_variants_match() {
        for (a, b) in [
            ("Aditya", "Adithya"),
            ("Vikram", "Bikram"),
            ("Shankar", "Sankar"),
            ("Lakshmi", "Laxmi"),
            ("Deepak", "Dipak"),
            ("Pooja", "Puja"),
            ("Mohammad", "Muhammad"),
            ("Zaheer", "Jaheer"),
        ] {
            assert_eq!(phonetic_match(a, b), 1.0, "{} / {}", a, b);
        }
    }

    #[test]
    fn test_partial_similarity() {
        let score = phonetic_match("Rahul", "Raul");
        assert!((score - 2.0 / 3.0).abs() < 1e-9);

        let score = phonetic_match("Suresh", "Ramesh");
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(phonetic_match("", "Ravi"), 0.0);
        assert_eq!(phonetic_match("Ravi", "42"), 0.0);
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }
}
