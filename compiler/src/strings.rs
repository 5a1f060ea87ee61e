use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
}

/// Collapse every maximal run of non-alphanumeric characters into a single
/// `_`, dropping leading and trailing runs entirely. Idempotent.
pub fn make_identifier(text: &str) -> String {
    let trimmed = text.trim_matches(|ch: char| !ch.is_ascii_alphanumeric());
    SEPARATOR_RUN.replace_all(trimmed, "_").into_owned()
}

/// Insert `_` at each lowercase-to-uppercase boundary and before each digit
/// group that follows a letter. The casing passes below rely on this being
/// idempotent: an inserted `_` is itself a boundary breaker.
fn split_words(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(chars.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            if (prev.is_ascii_lowercase() && ch.is_ascii_uppercase())
                || (prev.is_ascii_alphabetic() && ch.is_ascii_digit())
            {
                result.push('_');
            }
        }
        result.push(ch);
    }
    result
}

/// `lowercase_with_underscores` form, used for type and field names.
pub fn snake_case(text: &str) -> String {
    split_words(&make_identifier(text)).to_lowercase()
}

/// `UPPERCASE_WITH_UNDERSCORES` form, used for enum values and include
/// guards.
pub fn caps_case(text: &str) -> String {
    split_words(&make_identifier(text)).to_uppercase()
}
