//! Authentication service - Account registration and credential login.
//!
//! Accounts are identified by email or by phone number. Phones are stored
//! normalized, so any accepted spelling of a number finds the same account.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use super::credentials::{hash_password_blocking, verify_password_blocking};
use crate::domain::{
    format_phone_number, validate_email, AccountStatus, NewUser, PhoneNumber, RoleProfile, User,
    UserRole,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

const DUMMY_PASSWORD: &str = "zuasoko-dummy-password";

/// Sign-up request
#[derive(Debug, Clone)]
pub struct Registration {
    pub phone: String,
    pub email: Option<String>,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub profile: RoleProfile,
}

/// Successful login: the account and where the client should land
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub user: User,
    pub redirect_path: &'static str,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account with its role profile
    async fn register(&self, registration: Registration) -> AppResult<User>;

    /// Log in by email or phone number
    async fn login(&self, identifier: &str, password: &str) -> AppResult<LoginOutcome>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    hash_cost: u32,
    dummy_hash: String,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service; `hash_cost` is the Argon2 time cost for new hashes.
    ///
    /// Hashes a throwaway password once, on the blocking pool, so failed
    /// lookups cost as much as real verifications.
    pub async fn new(uow: Arc<U>, hash_cost: u32) -> AppResult<Self> {
        let dummy_hash = hash_password_blocking(DUMMY_PASSWORD.to_string(), hash_cost)
            .await?
            .into_string();
        Ok(Self {
            uow,
            hash_cost,
            dummy_hash,
        })
    }

    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<User>> {
        let identifier = identifier.trim();
        if identifier.contains('@') {
            self.uow.users().find_by_email(identifier).await
        } else {
            self.uow
                .users()
                .find_by_phone(&format_phone_number(identifier))
                .await
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, registration: Registration) -> AppResult<User> {
        let phone = PhoneNumber::parse(&registration.phone)?;
        let email = match registration.email.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(email) if validate_email(email) => Some(email.to_lowercase()),
            Some(email) => {
                return Err(AppError::validation(format!("Invalid email address: {}", email)))
            }
        };

        let users = self.uow.users();
        if users.find_by_phone(phone.as_str()).await?.is_some() {
            return Err(AppError::conflict("Phone number"));
        }
        if let Some(email) = &email {
            if users.find_by_email(email).await?.is_some() {
                return Err(AppError::conflict("Email"));
            }
        }

        let password = hash_password_blocking(registration.password, self.hash_cost).await?;

        // Drivers wait for admin vetting before they can log in.
        let status = match registration.profile.role() {
            UserRole::Driver => AccountStatus::Pending,
            _ => AccountStatus::Active,
        };

        let mut new_user = NewUser::new(
            phone.as_str(),
            password.into_string(),
            registration.first_name,
            registration.last_name,
            registration.profile,
        )?
        .with_status(status);
        if let Some(email) = email {
            new_user = new_user.with_email(&email)?;
        }

        let account = users.create(new_user).await?;
        tracing::info!(user_id = %account.user.id, role = %account.user.role, "User registered");
        Ok(account.user)
    }

    async fn login(&self, identifier: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self.find_by_identifier(identifier).await?;

        let hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(|| self.dummy_hash.clone());
        let password_valid = verify_password_blocking(password.to_string(), hash).await?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::debug!("Login rejected");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !user.is_active() {
            tracing::debug!(user_id = %user.id, status = %user.status, "Login for inactive account");
            return Err(AppError::AccountInactive);
        }

        tracing::info!(user_id = %user.id, "User logged in");
        let redirect_path = user.redirect_path();
        Ok(LoginOutcome {
            user,
            redirect_path,
        })
    }
}
