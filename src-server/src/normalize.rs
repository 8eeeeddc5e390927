//! Input normalization applied before guest lookup and storage.

use regex::Regex;
use std::sync::LazyLock;

static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").expect("valid regex"));
static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Format a US phone number as `(XXX) XXX-XXXX`.
///
/// Ten digits, or eleven starting with the country code `1`, are reformatted.
/// Anything else (international numbers, typos) is returned as given.
pub fn normalize_phone(phone: &str) -> String {
    if phone.is_empty() {
        return String::new();
    }

    let stripped = NON_DIGIT.replace_all(phone, "");
    let digits: &str = &stripped;
    let digits = match digits.strip_prefix('1') {
        Some(rest) if digits.len() == 11 => rest,
        _ => digits,
    };

    if digits.len() != 10 {
        return phone.to_string();
    }

    format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
}

/// Trim, collapse inner whitespace and title-case a name.
///
/// Every letter that follows a non-letter starts a word, so hyphenated and
/// apostrophe names come out as `Mary-Jane` and `O'Brien`.
pub fn normalize_name(name: &str) -> String {
    let collapsed = MULTI_SPACE.replace_all(name.trim(), " ");

    let mut out = String::with_capacity(collapsed.len());
    let mut word_start = true;
    for c in collapsed.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

/// Trim and lower-case an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        let cases = [
            ("5551234567", "(555) 123-4567"),
            ("555-123-4567", "(555) 123-4567"),
            ("(555) 123-4567", "(555) 123-4567"),
            ("555.123.4567", "(555) 123-4567"),
            ("+1 555 123 4567", "(555) 123-4567"),
            ("15551234567", "(555) 123-4567"),
            ("", ""),
            ("12345", "12345"),
            ("+44 20 7946 0958", "+44 20 7946 0958"),
            ("25551234567", "25551234567"),
            // Non-ASCII digits are not phone digits
            ("١٢٣٤٥", "١٢٣٤٥"),
            ("٥٥٥١٢٣٤٥٦٧", "٥٥٥١٢٣٤٥٦٧"),
            ("555１２３4567", "555１２３4567"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_phone(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_normalize_name() {
        let cases = [
            ("  JOHN  DOE  ", "John Doe"),
            ("jane", "Jane"),
            ("mary-jane", "Mary-Jane"),
            ("o'brien", "O'Brien"),
            ("mcDONALD", "Mcdonald"),
            ("ann\tmarie", "Ann Marie"),
            ("", ""),
            ("   ", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_name(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  John@Example.COM "), "john@example.com");
        assert_eq!(normalize_email(""), "");
    }
}
