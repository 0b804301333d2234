//! Marketplace value types: produce listings, market prices, weather alerts
//! and carts.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

// =============================================================================
// Produce
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduce {
    /// Farmer profile id
    pub farmer_id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
    pub description: String,
    pub stock_quantity: f64,
    pub is_approved: bool,
    pub is_featured: bool,
    pub slug: String,
    pub tags: Vec<String>,
    pub harvest_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl NewProduce {
    pub fn validate(&self) -> AppResult<()> {
        if self.slug.is_empty()
            || !self
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(AppError::validation(format!("Invalid produce slug: {:?}", self.slug)));
        }
        if self.price_per_unit <= 0.0 {
            return Err(AppError::validation("Price per unit must be positive"));
        }
        if self.quantity < 0.0 || self.stock_quantity < 0.0 {
            return Err(AppError::validation("Quantities cannot be negative"));
        }
        if self.expiry_date < self.harvest_date {
            return Err(AppError::validation("Expiry date is before harvest date"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produce {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
    pub stock_quantity: f64,
    pub is_approved: bool,
    pub is_featured: bool,
    pub slug: String,
    pub tags: Vec<String>,
    pub harvest_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Market prices
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMarketPrice {
    pub produce: String,
    pub county: String,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub market_name: String,
    pub report_date: DateTime<Utc>,
}

impl NewMarketPrice {
    pub fn validate(&self) -> AppResult<()> {
        if !(self.min_price <= self.avg_price && self.avg_price <= self.max_price) {
            return Err(AppError::validation(format!(
                "Market price for {} must satisfy min <= avg <= max",
                self.produce
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrice {
    pub id: Uuid,
    pub produce: String,
    pub county: String,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub market_name: String,
    pub report_date: DateTime<Utc>,
}

// =============================================================================
// Weather alerts
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "LOW",
            AlertSeverity::Medium => "MEDIUM",
            AlertSeverity::High => "HIGH",
        }
    }
}

impl FromStr for AlertSeverity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(AlertSeverity::Low),
            "MEDIUM" => Ok(AlertSeverity::Medium),
            "HIGH" => Ok(AlertSeverity::High),
            other => Err(AppError::validation(format!("Unknown alert severity: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWeatherAlert {
    pub county: String,
    /// Free-form kind, e.g. `RAIN`
    pub alert_type: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl NewWeatherAlert {
    pub fn validate(&self) -> AppResult<()> {
        if self.end_date < self.start_date {
            return Err(AppError::validation("Weather alert ends before it starts"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub id: Uuid,
    pub county: String,
    pub alert_type: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

// =============================================================================
// Carts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub produce_id: Uuid,
    pub quantity: i32,
    pub price_per_unit: f64,
}

impl NewCartItem {
    pub fn total_price(&self) -> f64 {
        f64::from(self.quantity) * self.price_per_unit
    }
}

/// A cart and its lines. Totals are always derived from the lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCart {
    /// Customer profile id
    pub customer_id: Uuid,
    pub items: Vec<NewCartItem>,
}

impl NewCart {
    pub fn total_items(&self) -> i32 {
        self.items.len() as i32
    }

    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(NewCartItem::total_price).sum()
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.items.iter().any(|item| item.quantity <= 0) {
            return Err(AppError::validation("Cart item quantity must be positive"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub produce_id: Uuid,
    pub quantity: i32,
    pub price_per_unit: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub total_items: i32,
    pub total_amount: f64,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
}
