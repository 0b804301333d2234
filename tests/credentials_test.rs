//! Credential and normalization helpers, exercised through the public API.

use zuasoko::domain::{hash_password_with_cost, AccountStatus, UserRole};
use zuasoko::{
    format_phone_number, role_redirect_path, validate_email, validate_phone_number,
    verify_password, AppError, Password, PhoneNumber,
};

#[test]
fn test_hash_and_verify() {
    let hash = hash_password_with_cost("customer123", 1).unwrap();

    assert!(hash.starts_with("$argon2id$"));
    assert!(verify_password("customer123", &hash));
    assert!(!verify_password("customer124", &hash));
}

#[test]
fn test_hashes_are_salted() {
    let first = hash_password_with_cost("farmer123", 1).unwrap();
    let second = hash_password_with_cost("farmer123", 1).unwrap();

    assert_ne!(first, second);
    assert!(verify_password("farmer123", &first));
    assert!(verify_password("farmer123", &second));
}

#[test]
fn test_hash_rejects_empty_input() {
    assert!(matches!(
        hash_password_with_cost("", 1),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_verify_degrades_to_false() {
    assert!(!verify_password("admin123", ""));
    assert!(!verify_password("admin123", "not-a-hash"));
    assert!(!verify_password("admin123", "$2b$12$abcdefghijklmnopqrstuv"));
}

#[test]
fn test_password_policy() {
    assert!(Password::new_with_cost("short", 1).is_err());

    let password = Password::new_with_cost("driver123", 1).unwrap();
    assert!(password.verify("driver123"));
    assert!(!format!("{:?}", password).contains("argon2"));
}

#[test]
fn test_format_phone_number_spellings() {
    let expected = "254712345678";
    for raw in [
        "0712345678",
        "0712 345 678",
        "+254712345678",
        "254712345678",
        "(0712) 345-678",
        "712345678",
    ] {
        assert_eq!(format_phone_number(raw), expected, "input {:?}", raw);
    }
}

#[test]
fn test_format_phone_number_edge_cases() {
    assert_eq!(format_phone_number(""), "254");
    assert_eq!(format_phone_number("abc"), "254");
    assert_eq!(format_phone_number("00712345678"), "2540712345678");
    assert_eq!(format_phone_number("254254712345678"), "254254712345678");
}

#[test]
fn test_format_phone_number_is_idempotent() {
    for raw in ["0712345678", "+254 733 000 111", "733000111", "12"] {
        let once = format_phone_number(raw);
        assert_eq!(format_phone_number(&once), once, "input {:?}", raw);
    }
}

#[test]
fn test_validate_phone_number() {
    assert!(validate_phone_number("0712345678"));
    assert!(validate_phone_number("+254 712 345 678"));
    assert!(validate_phone_number("712345678"));

    assert!(!validate_phone_number(""));
    assert!(!validate_phone_number("071234567"));
    assert!(!validate_phone_number("07123456789"));
    assert!(!validate_phone_number("00712345678"));
}

#[test]
fn test_phone_number_value() {
    let phone = PhoneNumber::parse(" 0734-567-890 ").unwrap();
    assert_eq!(phone.as_str(), "254734567890");
    assert!(matches!(
        PhoneNumber::parse("12345"),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_validate_email() {
    assert!(validate_email("admin@zuasoko.com"));
    assert!(validate_email("first.last+tag@mail.example.co.ke"));

    assert!(!validate_email(""));
    assert!(!validate_email("admin@zuasoko"));
    assert!(!validate_email("admin zuasoko@example.com"));
    assert!(!validate_email("@example.com"));
    assert!(!validate_email("admin@@example.com"));
}

#[test]
fn test_role_redirect_paths() {
    assert_eq!(role_redirect_path("FARMER"), "/farmer/dashboard");
    assert_eq!(role_redirect_path("CUSTOMER"), "/customer/marketplace");
    assert_eq!(role_redirect_path("DRIVER"), "/driver/dashboard");
    assert_eq!(role_redirect_path("FARMER_AGENT"), "/agent/dashboard");
    assert_eq!(role_redirect_path("ADMIN"), "/admin/dashboard");

    assert_eq!(role_redirect_path("farmer"), "/");
    assert_eq!(role_redirect_path(""), "/");
    assert_eq!(role_redirect_path("SUPERUSER"), "/");
}

#[test]
fn test_role_enum_matches_tags() {
    for role in UserRole::ALL {
        assert_eq!(role.redirect_path(), role_redirect_path(role.as_str()));
        assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
    }
    assert_eq!("ACTIVE".parse::<AccountStatus>().unwrap(), AccountStatus::Active);
}
