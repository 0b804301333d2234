//! User domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::email::validate_email;
use super::phone::PhoneNumber;
use super::profile::RoleProfile;
use crate::config::{
    REDIRECT_ADMIN, REDIRECT_CUSTOMER, REDIRECT_DEFAULT, REDIRECT_DRIVER, REDIRECT_FARMER,
    REDIRECT_FARMER_AGENT, ROLE_ADMIN, ROLE_CUSTOMER, ROLE_DRIVER, ROLE_FARMER, ROLE_FARMER_AGENT,
};
use crate::errors::{AppError, AppResult};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Farmer,
    Customer,
    Driver,
    FarmerAgent,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::Farmer,
        UserRole::Customer,
        UserRole::Driver,
        UserRole::FarmerAgent,
        UserRole::Admin,
    ];

    /// Stored tag for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Farmer => ROLE_FARMER,
            UserRole::Customer => ROLE_CUSTOMER,
            UserRole::Driver => ROLE_DRIVER,
            UserRole::FarmerAgent => ROLE_FARMER_AGENT,
            UserRole::Admin => ROLE_ADMIN,
        }
    }

    /// Landing page after login
    pub fn redirect_path(&self) -> &'static str {
        match self {
            UserRole::Farmer => REDIRECT_FARMER,
            UserRole::Customer => REDIRECT_CUSTOMER,
            UserRole::Driver => REDIRECT_DRIVER,
            UserRole::FarmerAgent => REDIRECT_FARMER_AGENT,
            UserRole::Admin => REDIRECT_ADMIN,
        }
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    /// Tags are matched exactly; `"admin"` is not a role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Unknown role: {}", s)))
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post-login redirect for a raw role tag. Unknown tags land on `/`.
pub fn role_redirect_path(role: &str) -> &'static str {
    role.parse::<UserRole>()
        .map(|role| role.redirect_path())
        .unwrap_or(REDIRECT_DEFAULT)
}

/// Account lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Pending,
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Pending => "PENDING",
            AccountStatus::Active => "ACTIVE",
            AccountStatus::Suspended => "SUSPENDED",
        }
    }
}

impl FromStr for AccountStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(AccountStatus::Pending),
            "ACTIVE" => Ok(AccountStatus::Active),
            "SUSPENDED" => Ok(AccountStatus::Suspended),
            other => Err(AppError::validation(format!("Unknown account status: {}", other))),
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Landing page for this user's role
    pub fn redirect_path(&self) -> &'static str {
        self.role.redirect_path()
    }
}

/// A persisted user and the id of its role profile row.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user: User,
    pub profile_id: Uuid,
}

/// A user about to be persisted together with its role profile.
///
/// The role is derived from the profile, so the two cannot disagree.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Option<String>,
    pub phone: PhoneNumber,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub status: AccountStatus,
    pub profile: RoleProfile,
}

impl NewUser {
    /// Build a pending user. The phone is normalized and validated.
    pub fn new(
        phone: &str,
        password_hash: String,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        profile: RoleProfile,
    ) -> AppResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }

        Ok(Self {
            email: None,
            phone: PhoneNumber::parse(phone)?,
            password_hash,
            first_name,
            last_name,
            status: AccountStatus::Pending,
            profile,
        })
    }

    /// Attach an email address after checking its syntax.
    pub fn with_email(mut self, email: &str) -> AppResult<Self> {
        let email = email.trim();
        if !validate_email(email) {
            return Err(AppError::validation(format!("Invalid email address: {}", email)));
        }
        self.email = Some(email.to_lowercase());
        Ok(self)
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn role(&self) -> UserRole {
        self.profile.role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{AdminProfile, CustomerProfile};

    fn customer_profile() -> RoleProfile {
        RoleProfile::Customer(CustomerProfile {
            county: "Nairobi".to_string(),
            latitude: None,
            longitude: None,
            loyalty_points: 0,
        })
    }

    #[test]
    fn test_redirect_paths() {
        assert_eq!(UserRole::Farmer.redirect_path(), "/farmer/dashboard");
        assert_eq!(UserRole::Customer.redirect_path(), "/customer/marketplace");
        assert_eq!(UserRole::Driver.redirect_path(), "/driver/dashboard");
        assert_eq!(UserRole::FarmerAgent.redirect_path(), "/agent/dashboard");
        assert_eq!(UserRole::Admin.redirect_path(), "/admin/dashboard");
    }

    #[test]
    fn test_role_redirect_path_from_tag() {
        assert_eq!(role_redirect_path("ADMIN"), "/admin/dashboard");
        assert_eq!(role_redirect_path("FARMER_AGENT"), "/agent/dashboard");
        assert_eq!(role_redirect_path("UNKNOWN"), "/");
        assert_eq!(role_redirect_path("admin"), "/");
        assert_eq!(role_redirect_path(""), "/");
    }

    #[test]
    fn test_role_tag_roundtrip() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn test_role_serde_uses_tags() {
        let json = serde_json::to_string(&UserRole::FarmerAgent).unwrap();
        assert_eq!(json, "\"FARMER_AGENT\"");
    }

    #[test]
    fn test_account_status_parse() {
        assert_eq!("ACTIVE".parse::<AccountStatus>().unwrap(), AccountStatus::Active);
        assert!("active".parse::<AccountStatus>().is_err());
    }

    #[test]
    fn test_new_user_normalizes_phone() {
        let user = NewUser::new("0756 789 012", "hash".into(), "Mary", "Customer", customer_profile())
            .unwrap();
        assert_eq!(user.phone.as_str(), "254756789012");
        assert_eq!(user.role(), UserRole::Customer);
        assert_eq!(user.status, AccountStatus::Pending);
        assert!(user.email.is_none());
    }

    #[test]
    fn test_new_user_rejects_bad_phone() {
        let result = NewUser::new("12345", "hash".into(), "Mary", "Customer", customer_profile());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_new_user_rejects_blank_name() {
        let result = NewUser::new("0712345678", "hash".into(), " ", "Customer", customer_profile());
        assert!(result.is_err());
    }

    #[test]
    fn test_with_email() {
        let profile = RoleProfile::Admin(AdminProfile::full_access());
        let user = NewUser::new("0712345678", "hash".into(), "Admin", "User", profile)
            .unwrap()
            .with_email(" Admin@Zuasoko.com ")
            .unwrap();
        assert_eq!(user.email.as_deref(), Some("admin@zuasoko.com"));
        assert_eq!(user.role(), UserRole::Admin);
    }

    #[test]
    fn test_with_email_rejects_invalid() {
        let user = NewUser::new("0712345678", "hash".into(), "A", "B", customer_profile()).unwrap();
        assert!(user.with_email("not-an-email").is_err());
    }
}
