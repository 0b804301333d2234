//! Seed command - Loads the demo data set into the configured database.

use std::sync::Arc;

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, Persistence, UnitOfWork};
use crate::services::{SeedService, Seeder};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = if args.fresh {
        let db = Database::connect_without_migrations(&config).await?;
        tracing::warn!("Dropping all tables before seeding...");
        db.fresh_migrations().await?;
        db
    } else {
        Database::connect(&config).await?
    };
    db.ping().await?;

    let uow = Arc::new(Persistence::new(db.get_connection()));
    let report = Seeder::new(uow.clone(), config.password_hash_cost)
        .seed()
        .await?;
    let total_users = uow.users().count().await?;

    tracing::info!(
        users = report.users,
        produce = report.produce,
        market_prices = report.market_prices,
        weather_alerts = report.weather_alerts,
        carts = report.carts,
        total_users,
        "Database seeded"
    );
    Ok(())
}
