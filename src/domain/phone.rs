//! Kenyan phone number normalization.
//!
//! Numbers are stored as bare digits with the country code, e.g.
//! `254712345678`. The normalization is two ordered prefix checks on the
//! digit string, not a structural parse: `0712…` and `712…` both become
//! `254712…`, and anything already starting with `254` is left alone.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{KENYA_COUNTRY_CODE, NATIONAL_TRUNK_PREFIX, SUBSCRIBER_NUMBER_DIGITS};
use crate::errors::{AppError, AppResult};

static NORMALIZED_PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{}[0-9]{{{}}}$",
        KENYA_COUNTRY_CODE, SUBSCRIBER_NUMBER_DIGITS
    ))
    .expect("Invalid phone regex")
});

/// Normalize a raw phone string.
///
/// 1. Drop every character that is not an ASCII digit.
/// 2. A leading `0` is replaced by `254`.
/// 3. If the result still lacks the `254` prefix, it is prepended.
///
/// An input without digits yields `"254"`.
pub fn format_phone_number(phone: &str) -> String {
    let mut cleaned: String = phone.chars().filter(char::is_ascii_digit).collect();

    if let Some(rest) = cleaned.strip_prefix(NATIONAL_TRUNK_PREFIX) {
        cleaned = format!("{}{}", KENYA_COUNTRY_CODE, rest);
    }

    if !cleaned.starts_with(KENYA_COUNTRY_CODE) {
        cleaned = format!("{}{}", KENYA_COUNTRY_CODE, cleaned);
    }

    cleaned
}

/// True if the normalized form is `254` followed by exactly nine digits.
pub fn validate_phone_number(phone: &str) -> bool {
    NORMALIZED_PHONE_RE.is_match(&format_phone_number(phone))
}

/// A normalized, validated phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize `raw` and reject it unless it is a full Kenyan number.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let formatted = format_phone_number(raw);
        if !NORMALIZED_PHONE_RE.is_match(&formatted) {
            return Err(AppError::validation(format!(
                "Invalid phone number: {}",
                raw.trim()
            )));
        }
        Ok(Self(formatted))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_local_with_trunk_prefix() {
        assert_eq!(format_phone_number("0712345678"), "254712345678");
    }

    #[test]
    fn test_format_without_prefix() {
        assert_eq!(format_phone_number("712345678"), "254712345678");
    }

    #[test]
    fn test_format_already_normalized() {
        assert_eq!(format_phone_number("254712345678"), "254712345678");
    }

    #[test]
    fn test_format_strips_separators() {
        assert_eq!(format_phone_number("+254 712-345-678"), "254712345678");
        assert_eq!(format_phone_number("(0712) 345 678"), "254712345678");
    }

    #[test]
    fn test_format_empty_is_country_code() {
        assert_eq!(format_phone_number(""), "254");
        assert_eq!(format_phone_number("no digits"), "254");
    }

    #[test]
    fn test_format_only_strips_one_trunk_zero() {
        assert_eq!(format_phone_number("00712345678"), "2540712345678");
    }

    #[test]
    fn test_format_keeps_254_prefix_with_zero() {
        // Prefix checks are literal: the zero after 254 is not touched.
        assert_eq!(format_phone_number("2540712345678"), "2540712345678");
    }

    #[test]
    fn test_format_ignores_non_ascii_digits() {
        assert_eq!(format_phone_number("٠712345678"), "254712345678");
    }

    #[test]
    fn test_format_is_idempotent_on_normalized() {
        for raw in ["0712345678", "712345678", "254712345678", "+254-723-456-789"] {
            let once = format_phone_number(raw);
            assert_eq!(format_phone_number(&once), once);
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate_phone_number("0712345678"));
        assert!(validate_phone_number("254712345678"));
        assert!(validate_phone_number("+254 712 345 678"));
        assert!(!validate_phone_number("12345"));
        assert!(!validate_phone_number(""));
        assert!(!validate_phone_number("07123456789"));
    }

    #[test]
    fn test_parse() {
        let phone = PhoneNumber::parse("0734 567 890").unwrap();
        assert_eq!(phone.as_str(), "254734567890");
        assert_eq!(phone.to_string(), "254734567890");
    }

    #[test]
    fn test_parse_rejects_short_number() {
        assert!(matches!(
            PhoneNumber::parse("12345"),
            Err(AppError::Validation(_))
        ));
    }
}
