//! Role-specific profile data stored alongside each user.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRole;
use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub can_approve_drivers: bool,
    pub can_manage_users: bool,
    pub can_view_analytics: bool,
}

impl AdminProfile {
    pub fn full_access() -> Self {
        Self {
            can_approve_drivers: true,
            can_manage_users: true,
            can_view_analytics: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerAgentProfile {
    pub assigned_county: String,
    pub onboarding_quota: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub farm_name: String,
    pub county: String,
    pub sub_county: Option<String>,
    /// Acres
    pub farm_size: f64,
    pub kra_pin: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub subscription_paid: bool,
    pub subscription_date: Option<DateTime<Utc>>,
    /// Profile id of the onboarding agent
    pub farmer_agent_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub county: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub loyalty_points: i32,
}

/// Driver vetting state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Pending => "PENDING",
            DriverStatus::Approved => "APPROVED",
            DriverStatus::Rejected => "REJECTED",
            DriverStatus::Suspended => "SUSPENDED",
        }
    }
}

impl FromStr for DriverStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(DriverStatus::Pending),
            "APPROVED" => Ok(DriverStatus::Approved),
            "REJECTED" => Ok(DriverStatus::Rejected),
            "SUSPENDED" => Ok(DriverStatus::Suspended),
            other => Err(AppError::validation(format!("Unknown driver status: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub license_number: String,
    pub vehicle_type: String,
    pub vehicle_reg_no: String,
    pub id_number: String,
    pub status: DriverStatus,
    pub approved_at: Option<DateTime<Utc>>,
    /// User id of the approving admin
    pub approved_by: Option<Uuid>,
    pub is_available: bool,
    pub total_deliveries: i32,
    pub rating: f64,
}

impl DriverProfile {
    /// Mark the driver approved by `admin_id` at `at`.
    pub fn approve(mut self, admin_id: Uuid, at: DateTime<Utc>) -> Self {
        self.status = DriverStatus::Approved;
        self.approved_by = Some(admin_id);
        self.approved_at = Some(at);
        self
    }
}

/// Profile row created in the same transaction as its user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleProfile {
    Admin(AdminProfile),
    FarmerAgent(FarmerAgentProfile),
    Farmer(FarmerProfile),
    Customer(CustomerProfile),
    Driver(DriverProfile),
}

impl RoleProfile {
    pub fn role(&self) -> UserRole {
        match self {
            RoleProfile::Admin(_) => UserRole::Admin,
            RoleProfile::FarmerAgent(_) => UserRole::FarmerAgent,
            RoleProfile::Farmer(_) => UserRole::Farmer,
            RoleProfile::Customer(_) => UserRole::Customer,
            RoleProfile::Driver(_) => UserRole::Driver,
        }
    }
}
