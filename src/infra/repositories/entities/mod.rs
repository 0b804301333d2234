//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admin;
pub mod cart;
pub mod cart_item;
pub mod customer;
pub mod driver;
pub mod farmer;
pub mod farmer_agent;
pub mod market_price;
pub mod produce;
pub mod user;
pub mod weather_alert;
