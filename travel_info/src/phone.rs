use lazy_static::lazy_static;
use regex::Regex;

const MAX_DIGITS: usize = 10;

lazy_static! {
    static ref NON_DIGIT: Regex = Regex::new("[^0-9]").expect("valid non-digit pattern");
}

pub fn digits_only(raw: &str) -> String {
    NON_DIGIT.replace_all(raw, "").into_owned()
}

/// Punctuates whatever digits the user has typed so far as a North American
/// number: `401` -> `401`, `4015` -> `(401) 5`, `4015551234` -> `(401) 555-1234`.
/// Digits past the tenth are dropped.
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    let digits = &digits[..digits.len().min(MAX_DIGITS)];
    match digits.len() {
        0..=3 => digits.to_owned(),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
