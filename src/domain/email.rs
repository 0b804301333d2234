//! Syntactic email check. No DNS or mailbox verification.

use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace as ECMAScript defines it. Unlike Rust's Unicode `\s` this
/// includes U+FEFF and excludes U+0085.
const ECMA_WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$",
        ws = ECMA_WHITESPACE
    ))
    .expect("Invalid email regex")
});

/// True for `local@domain.tld` shapes: no whitespace, exactly one `@`, and a
/// dot somewhere after it with characters on both sides.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("admin@zuasoko.com"));
        assert!(validate_email("first.last+tag@mail.example.co.ke"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email(""));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a@.com"));
        assert!(!validate_email("a@b."));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@@b.com"));
        assert!(!validate_email("a@b@c.com"));
    }

    #[test]
    fn test_whitespace_follows_ecmascript() {
        assert!(!validate_email("a\u{FEFF}b@c.com"));
        assert!(!validate_email("a\u{00A0}b@c.com"));
        assert!(!validate_email("a@b\u{3000}c.com"));
        assert!(!validate_email("a\tb@c.com"));

        // NEL is not whitespace in ECMAScript
        assert!(validate_email("a\u{85}b@c.com"));
    }
}
