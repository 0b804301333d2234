//! Marketplace repository: produce, market prices, weather alerts and carts.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, Set};
use uuid::Uuid;

use super::entities::{cart, cart_item, market_price, produce, weather_alert};
use crate::domain::{
    Cart, CartItem, MarketPrice, NewCart, NewMarketPrice, NewProduce, NewWeatherAlert, Produce,
    WeatherAlert,
};
use crate::errors::AppResult;
use crate::infra::unit_of_work::run_in_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Marketplace repository trait for dependency injection.
///
/// Every write validates its input before touching the database.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MarketplaceRepository: Send + Sync {
    /// Create a produce listing
    async fn create_produce(&self, produce: NewProduce) -> AppResult<Produce>;

    /// Record a market price report
    async fn create_market_price(&self, price: NewMarketPrice) -> AppResult<MarketPrice>;

    /// Publish a weather alert
    async fn create_weather_alert(&self, alert: NewWeatherAlert) -> AppResult<WeatherAlert>;

    /// Create a cart with its items atomically
    async fn create_cart(&self, cart: NewCart) -> AppResult<Cart>;
}

/// SeaORM implementation of MarketplaceRepository
pub struct MarketplaceStore {
    db: DatabaseConnection,
}

impl MarketplaceStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MarketplaceRepository for MarketplaceStore {
    async fn create_produce(&self, produce: NewProduce) -> AppResult<Produce> {
        insert_produce(&self.db, produce).await
    }

    async fn create_market_price(&self, price: NewMarketPrice) -> AppResult<MarketPrice> {
        insert_market_price(&self.db, price).await
    }

    async fn create_weather_alert(&self, alert: NewWeatherAlert) -> AppResult<WeatherAlert> {
        insert_weather_alert(&self.db, alert).await
    }

    async fn create_cart(&self, cart: NewCart) -> AppResult<Cart> {
        run_in_transaction(&self.db, |ctx| {
            Box::pin(async move { ctx.marketplace().create_cart(cart).await })
        })
        .await
    }
}

async fn insert_produce<C>(conn: &C, new: NewProduce) -> AppResult<Produce>
where
    C: ConnectionTrait,
{
    new.validate()?;

    let model = produce::ActiveModel {
        id: Set(Uuid::new_v4()),
        farmer_id: Set(new.farmer_id),
        name: Set(new.name),
        category: Set(new.category),
        quantity: Set(new.quantity),
        unit: Set(new.unit),
        price_per_unit: Set(new.price_per_unit),
        description: Set(new.description),
        stock_quantity: Set(new.stock_quantity),
        is_approved: Set(new.is_approved),
        is_featured: Set(new.is_featured),
        slug: Set(new.slug),
        tags: Set(new.tags),
        harvest_date: Set(new.harvest_date),
        expiry_date: Set(new.expiry_date),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(conn)
    .await?;

    Ok(Produce::from(model))
}

async fn insert_market_price<C>(conn: &C, new: NewMarketPrice) -> AppResult<MarketPrice>
where
    C: ConnectionTrait,
{
    new.validate()?;

    let model = market_price::ActiveModel {
        id: Set(Uuid::new_v4()),
        produce: Set(new.produce),
        county: Set(new.county),
        avg_price: Set(new.avg_price),
        min_price: Set(new.min_price),
        max_price: Set(new.max_price),
        market_name: Set(new.market_name),
        report_date: Set(new.report_date),
    }
    .insert(conn)
    .await?;

    Ok(MarketPrice::from(model))
}

async fn insert_weather_alert<C>(conn: &C, new: NewWeatherAlert) -> AppResult<WeatherAlert>
where
    C: ConnectionTrait,
{
    new.validate()?;

    let model = weather_alert::ActiveModel {
        id: Set(Uuid::new_v4()),
        county: Set(new.county),
        alert_type: Set(new.alert_type),
        severity: Set(new.severity.as_str().to_string()),
        message: Set(new.message),
        start_date: Set(new.start_date),
        end_date: Set(new.end_date),
    }
    .insert(conn)
    .await?;

    WeatherAlert::try_from(model)
}

/// Insert the cart header, then one row per item.
///
/// Not atomic on its own; callers pass a transaction.
pub(crate) async fn insert_cart_with_items<C>(conn: &C, new: NewCart) -> AppResult<Cart>
where
    C: ConnectionTrait,
{
    new.validate()?;

    let cart_id = Uuid::new_v4();
    let header = cart::ActiveModel {
        id: Set(cart_id),
        customer_id: Set(new.customer_id),
        total_items: Set(new.total_items()),
        total_amount: Set(new.total_amount()),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(conn)
    .await?;

    let mut items = Vec::with_capacity(new.items.len());
    for item in new.items {
        let total_price = item.total_price();
        let model = cart_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            cart_id: Set(cart_id),
            produce_id: Set(item.produce_id),
            quantity: Set(item.quantity),
            price_per_unit: Set(item.price_per_unit),
            total_price: Set(total_price),
        }
        .insert(conn)
        .await?;
        items.push(CartItem::from(model));
    }

    tracing::debug!(%cart_id, items = items.len(), "Cart inserted");

    Ok(Cart {
        id: header.id,
        customer_id: header.customer_id,
        total_items: header.total_items,
        total_amount: header.total_amount,
        items,
        created_at: header.created_at,
    })
}
