use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.[0-9]{4}$").unwrap()
});

/// Trims surrounding whitespace and upper-cases the first character.
/// The remaining characters are left untouched.
pub fn normalize_name(value: &str) -> String {
    let trimmed = value.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Exactly ten ASCII digits, nothing else.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Checks the `DD.MM.YYYY` shape only; calendar validity is left to the parser.
pub fn is_birthday_pattern(value: &str) -> bool {
    BIRTHDAY_RE.is_match(value)
}
