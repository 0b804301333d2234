//! Password hashing off the async executor.
//!
//! Argon2 at the production work factor takes long enough to stall a runtime
//! worker, so services hash and verify on tokio's blocking pool.

use crate::domain::{verify_password, Password};
use crate::errors::{AppError, AppResult};

/// Apply the password policy and hash on the blocking pool.
pub async fn hash_password_blocking(plain_text: String, cost: u32) -> AppResult<Password> {
    tokio::task::spawn_blocking(move || Password::new_with_cost(&plain_text, cost))
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
}

/// Verify on the blocking pool. Malformed hashes verify as `false`.
pub async fn verify_password_blocking(plain_text: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || verify_password(&plain_text, &hash))
        .await
        .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))
}
