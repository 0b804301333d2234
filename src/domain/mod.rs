//! Domain layer - Core business entities and logic
//!
//! Pure value types and functions with no infrastructure dependencies:
//! credentials, phone and email checks, roles, profiles and marketplace data.

pub mod email;
pub mod marketplace;
pub mod password;
pub mod phone;
pub mod profile;
pub mod user;

pub use email::validate_email;
pub use marketplace::{
    AlertSeverity, Cart, CartItem, MarketPrice, NewCart, NewCartItem, NewMarketPrice, NewProduce,
    NewWeatherAlert, Produce, WeatherAlert,
};
pub use password::{hash_password, hash_password_with_cost, verify_password, Password};
pub use phone::{format_phone_number, validate_phone_number, PhoneNumber};
pub use profile::{
    AdminProfile, CustomerProfile, DriverProfile, DriverStatus, FarmerAgentProfile, FarmerProfile,
    RoleProfile,
};
pub use user::{role_redirect_path, AccountStatus, NewUser, User, UserAccount, UserRole};
