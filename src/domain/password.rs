//! Password hashing and verification.
//!
//! Hashes are Argon2id PHC strings. The work factor is the Argon2 iteration
//! count; memory and lane counts are fixed. Every hash embeds a fresh salt and
//! its own parameters, so verification never needs to know the cost used.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::{
    DEFAULT_PASSWORD_HASH_COST, MIN_PASSWORD_LENGTH, PASSWORD_HASH_MEMORY_KIB,
    PASSWORD_HASH_PARALLELISM,
};
use crate::errors::{AppError, AppResult};

/// Hash a password with the default work factor.
///
/// # Errors
/// Fails if `plain_text` is empty or the hashing primitive fails.
pub fn hash_password(plain_text: &str) -> AppResult<String> {
    hash_password_with_cost(plain_text, DEFAULT_PASSWORD_HASH_COST)
}

/// Hash a password with an explicit work factor.
///
/// # Errors
/// Fails if `plain_text` is empty, `cost` is rejected by Argon2 (zero), or
/// hashing fails.
pub fn hash_password_with_cost(plain_text: &str, cost: u32) -> AppResult<String> {
    if plain_text.is_empty() {
        return Err(AppError::validation("Password must not be empty"));
    }

    let salt = SaltString::generate(&mut OsRng);
    argon2(cost)?
        .hash_password(plain_text.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))
}

/// Check a password against a stored hash.
///
/// The comparison is constant-time. A malformed hash yields `false` rather
/// than an error so callers cannot distinguish it from a wrong password.
pub fn verify_password(plain_text: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        tracing::debug!("Rejecting malformed password hash");
        return false;
    };

    // Parameters come from the PHC string, not from this instance.
    Argon2::default()
        .verify_password(plain_text.as_bytes(), &parsed)
        .is_ok()
}

fn argon2(cost: u32) -> AppResult<Argon2<'static>> {
    let params = Params::new(PASSWORD_HASH_MEMORY_KIB, cost, PASSWORD_HASH_PARALLELISM, None)
        .map_err(|e| AppError::internal(format!("Invalid hash parameters: {}", e)))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Password value object that handles hashing and verification.
///
/// Applies the account password policy (minimum length) on top of
/// [`hash_password_with_cost`].
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text at the default cost.
    ///
    /// # Errors
    /// Returns validation error if password is too short.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        Self::new_with_cost(plain_text, DEFAULT_PASSWORD_HASH_COST)
    }

    /// Create a new password with an explicit work factor.
    pub fn new_with_cost(plain_text: &str, cost: u32) -> AppResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let hash = hash_password_with_cost(plain_text, cost)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        verify_password(plain_text, &self.hash)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    // Cheap cost for tests that don't care about the work factor.
    const TEST_COST: u32 = 1;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password_with_cost("SecurePassword123!", TEST_COST).unwrap();

        assert!(verify_password("SecurePassword123!", &hash));
        assert!(!verify_password("WrongPassword123", &hash));
    }

    #[test]
    fn test_default_cost_is_embedded() {
        let hash = hash_password("admin123").unwrap();
        assert!(hash.starts_with("$argon2id$v=19$m=19456,t=12,p=1$"));
        assert!(verify_password("admin123", &hash));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let hash1 = hash_password_with_cost(plain, TEST_COST).unwrap();
        let hash2 = hash_password_with_cost(plain, TEST_COST).unwrap();

        assert_ne!(hash1, hash2);
        assert!(verify_password(plain, &hash1));
        assert!(verify_password(plain, &hash2));
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = hash_password_with_cost("", TEST_COST);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_zero_cost_rejected() {
        let result = hash_password_with_cost("password", 0);
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_malformed_hash_is_false() {
        assert!(!verify_password("password", "not-a-hash"));
        assert!(!verify_password("password", ""));
        assert!(!verify_password("password", "$argon2id$v=19$garbage"));
    }

    #[test]
    fn test_verifies_hash_made_with_other_cost() {
        let hash = hash_password_with_cost("farmer123", 3).unwrap();
        assert!(hash.contains("t=3"));
        assert!(verify_password("farmer123", &hash));
    }

    #[test]
    fn test_unicode_password() {
        let plain = "nenosiri-siri-ñ-密码";
        let hash = hash_password_with_cost(plain, TEST_COST).unwrap();
        assert!(verify_password(plain, &hash));
    }

    #[test]
    fn test_password_value_object() {
        let password = Password::new_with_cost("customer123", TEST_COST).unwrap();
        let restored = Password::from_hash(password.as_str().to_string());

        assert!(restored.verify("customer123"));
        assert!(!restored.verify("customer124"));
        assert_eq!(password, restored);
    }

    #[test]
    fn test_password_too_short() {
        let result = Password::new_with_cost("short", TEST_COST);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(Password::new_with_cost("12345678", TEST_COST).is_ok());
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new_with_cost("driver123", TEST_COST).unwrap();
        let output = format!("{:?}", password);
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("argon2"));
    }
}
