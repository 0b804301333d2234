//! Seed service - Loads the demo data set.
//!
//! Rows are created in dependency order: admin, farmer agent, farmers,
//! customers, driver, produce, market prices, weather alert, cart. Each user
//! is written together with its profile; a failure stops the run and is
//! returned to the caller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::credentials::hash_password_blocking;
use super::fixtures::{self, SeedAccount};
use crate::domain::{AccountStatus, NewUser, UserAccount};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Counts of rows created by a seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub produce: usize,
    pub market_prices: usize,
    pub weather_alerts: usize,
    pub carts: usize,
}

/// Seed service trait for dependency injection.
#[async_trait]
pub trait SeedService: Send + Sync {
    /// Load the demo data set. Fails with `Conflict` if it is already present.
    async fn seed(&self) -> AppResult<SeedReport>;
}

/// Concrete implementation of SeedService using Unit of Work.
pub struct Seeder<U: UnitOfWork> {
    uow: Arc<U>,
    hash_cost: u32,
}

impl<U: UnitOfWork> Seeder<U> {
    /// Create new seeder; `hash_cost` is the Argon2 time cost for demo passwords
    pub fn new(uow: Arc<U>, hash_cost: u32) -> Self {
        Self { uow, hash_cost }
    }

    /// Seed with an explicit clock; dates on listings and alerts derive from `now`.
    pub async fn seed_at(&self, now: DateTime<Utc>) -> AppResult<SeedReport> {
        let users = self.uow.users();
        if users.find_by_email(fixtures::ADMIN_EMAIL).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Seed data ({})",
                fixtures::ADMIN_EMAIL
            )));
        }

        let mut report = SeedReport::default();

        tracing::info!("Seeding users");
        let admin = self.create_account(fixtures::admin()).await?;
        let agent = self.create_account(fixtures::farmer_agent()).await?;
        report.users += 2;

        let mut farmer_ids = Vec::with_capacity(2);
        for account in fixtures::farmers(agent.profile_id, now) {
            farmer_ids.push(self.create_account(account).await?.profile_id);
            report.users += 1;
        }

        let mut customer_ids = Vec::with_capacity(2);
        for account in fixtures::customers() {
            customer_ids.push(self.create_account(account).await?.profile_id);
            report.users += 1;
        }

        self.create_account(fixtures::driver(admin.user.id, now)).await?;
        report.users += 1;

        let marketplace = self.uow.marketplace();

        tracing::info!("Seeding produce");
        let mut listings = Vec::with_capacity(4);
        for listing in fixtures::produce(farmer_ids[0], farmer_ids[1], now) {
            listings.push(marketplace.create_produce(listing).await?);
            report.produce += 1;
        }

        tracing::info!("Seeding market prices and weather alerts");
        for price in fixtures::market_prices(now) {
            marketplace.create_market_price(price).await?;
            report.market_prices += 1;
        }
        marketplace
            .create_weather_alert(fixtures::weather_alert(now))
            .await?;
        report.weather_alerts += 1;

        tracing::info!("Seeding carts");
        let find = |slug: &str| {
            listings
                .iter()
                .find(|p| p.slug == slug)
                .ok_or_else(|| AppError::internal(format!("Seeded produce {} missing", slug)))
        };
        let cart = fixtures::cart(
            customer_ids[0],
            find(fixtures::TOMATOES_SLUG)?,
            find(fixtures::SPINACH_SLUG)?,
        );
        let cart = marketplace.create_cart(cart).await?;
        report.carts += 1;
        tracing::debug!(cart_id = %cart.id, total = cart.total_amount, "Cart seeded");

        tracing::info!(?report, "Seeding completed");
        Ok(report)
    }

    async fn create_account(&self, (seed, profile): SeedAccount) -> AppResult<UserAccount> {
        let password = hash_password_blocking(seed.password.to_string(), self.hash_cost).await?;

        let mut new_user = NewUser::new(
            seed.phone,
            password.into_string(),
            seed.first_name,
            seed.last_name,
            profile,
        )?
        .with_status(AccountStatus::Active);
        if let Some(email) = seed.email {
            new_user = new_user.with_email(email)?;
        }

        let account = self.uow.users().create(new_user).await?;
        tracing::debug!(
            user_id = %account.user.id,
            role = %account.user.role,
            "Seeded {}",
            account.user.full_name()
        );
        Ok(account)
    }
}

#[async_trait]
impl<U: UnitOfWork> SeedService for Seeder<U> {
    async fn seed(&self) -> AppResult<SeedReport> {
        self.seed_at(Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        verify_password, Cart, CartItem, MarketPrice, Produce, RoleProfile, User, UserRole,
        WeatherAlert,
    };
    use crate::infra::{
        MarketplaceRepository, MockMarketplaceRepository, MockUserRepository, UserRepository,
    };
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Test mock for UnitOfWork that wraps the repository mocks
    struct TestUnitOfWork {
        user_repo: Arc<MockUserRepository>,
        marketplace_repo: Arc<MockMarketplaceRepository>,
    }

    impl TestUnitOfWork {
        fn new(users: MockUserRepository, marketplace: MockMarketplaceRepository) -> Self {
            Self {
                user_repo: Arc::new(users),
                marketplace_repo: Arc::new(marketplace),
            }
        }
    }

    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.user_repo.clone()
        }

        fn marketplace(&self) -> Arc<dyn MarketplaceRepository> {
            self.marketplace_repo.clone()
        }
    }

    fn account_from(new_user: NewUser) -> UserAccount {
        let now = Utc::now();
        UserAccount {
            user: User {
                id: Uuid::new_v4(),
                role: new_user.role(),
                email: new_user.email,
                phone: new_user.phone.into_string(),
                password_hash: new_user.password_hash,
                first_name: new_user.first_name,
                last_name: new_user.last_name,
                status: new_user.status,
                created_at: now,
                updated_at: now,
            },
            profile_id: Uuid::new_v4(),
        }
    }

    fn existing_admin() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: Some(fixtures::ADMIN_EMAIL.to_string()),
            phone: "254712345678".to_string(),
            password_hash: "hashed".to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            role: UserRole::Admin,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    fn echo_marketplace(carts: Arc<Mutex<Vec<Cart>>>) -> MockMarketplaceRepository {
        let mut repo = MockMarketplaceRepository::new();
        repo.expect_create_produce().times(4).returning(|p| {
            Ok(Produce {
                id: Uuid::new_v4(),
                farmer_id: p.farmer_id,
                name: p.name,
                category: p.category,
                quantity: p.quantity,
                unit: p.unit,
                price_per_unit: p.price_per_unit,
                stock_quantity: p.stock_quantity,
                is_approved: p.is_approved,
                is_featured: p.is_featured,
                slug: p.slug,
                tags: p.tags,
                harvest_date: p.harvest_date,
                expiry_date: p.expiry_date,
                created_at: Utc::now(),
            })
        });
        repo.expect_create_market_price().times(2).returning(|p| {
            Ok(MarketPrice {
                id: Uuid::new_v4(),
                produce: p.produce,
                county: p.county,
                avg_price: p.avg_price,
                min_price: p.min_price,
                max_price: p.max_price,
                market_name: p.market_name,
                report_date: p.report_date,
            })
        });
        repo.expect_create_weather_alert().times(1).returning(|a| {
            Ok(WeatherAlert {
                id: Uuid::new_v4(),
                county: a.county,
                alert_type: a.alert_type,
                severity: a.severity,
                message: a.message,
                start_date: a.start_date,
                end_date: a.end_date,
            })
        });
        repo.expect_create_cart().times(1).returning(move |c| {
            let cart = Cart {
                id: Uuid::new_v4(),
                customer_id: c.customer_id,
                total_items: c.total_items(),
                total_amount: c.total_amount(),
                items: c
                    .items
                    .iter()
                    .map(|i| CartItem {
                        id: Uuid::new_v4(),
                        produce_id: i.produce_id,
                        quantity: i.quantity,
                        price_per_unit: i.price_per_unit,
                        total_price: i.total_price(),
                    })
                    .collect(),
                created_at: Utc::now(),
            };
            carts.lock().unwrap().push(cart.clone());
            Ok(cart)
        });
        repo
    }

    #[tokio::test]
    async fn test_seed_creates_full_data_set() {
        let created: Arc<Mutex<Vec<UserAccount>>> = Arc::new(Mutex::new(Vec::new()));

        let mut users = MockUserRepository::new();
        users.expect_find_by_email().times(1).returning(|_| Ok(None));
        let sink = created.clone();
        users.expect_create().times(7).returning(move |new_user| {
            let account = account_from(new_user);
            sink.lock().unwrap().push(account.clone());
            Ok(account)
        });

        let uow = TestUnitOfWork::new(users, echo_marketplace(Arc::new(Mutex::new(Vec::new()))));
        let seeder = Seeder::new(Arc::new(uow), 1);
        let report = seeder.seed().await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                users: 7,
                produce: 4,
                market_prices: 2,
                weather_alerts: 1,
                carts: 1,
            }
        );

        let created = created.lock().unwrap();
        let roles: Vec<UserRole> = created.iter().map(|a| a.user.role).collect();
        assert_eq!(
            roles,
            vec![
                UserRole::Admin,
                UserRole::FarmerAgent,
                UserRole::Farmer,
                UserRole::Farmer,
                UserRole::Customer,
                UserRole::Customer,
                UserRole::Driver,
            ]
        );
        assert!(created.iter().all(|a| a.user.status == AccountStatus::Active));
        assert_eq!(created[0].user.email.as_deref(), Some("admin@zuasoko.com"));
        assert!(created[3].user.email.is_none());
        assert!(verify_password("admin123", &created[0].user.password_hash));
        assert!(verify_password("driver123", &created[6].user.password_hash));
    }

    #[tokio::test]
    async fn test_seed_links_profiles() {
        let profiles: Arc<Mutex<Vec<(Uuid, Uuid, RoleProfile)>>> = Arc::new(Mutex::new(Vec::new()));

        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        let sink = profiles.clone();
        users.expect_create().returning(move |new_user| {
            let profile = new_user.profile.clone();
            let account = account_from(new_user);
            sink.lock()
                .unwrap()
                .push((account.user.id, account.profile_id, profile));
            Ok(account)
        });

        let carts: Arc<Mutex<Vec<Cart>>> = Arc::new(Mutex::new(Vec::new()));
        let marketplace = echo_marketplace(carts.clone());

        let uow = TestUnitOfWork::new(users, marketplace);
        Seeder::new(Arc::new(uow), 1).seed().await.unwrap();

        let profiles = profiles.lock().unwrap();
        let (admin_user_id, _, _) = profiles[0];
        let (_, agent_profile_id, _) = profiles[1];
        let (_, mary_profile_id, _) = profiles[4];

        match &profiles[2].2 {
            RoleProfile::Farmer(p) => assert_eq!(p.farmer_agent_id, Some(agent_profile_id)),
            other => panic!("unexpected profile {:?}", other),
        }
        match &profiles[3].2 {
            RoleProfile::Farmer(p) => assert_eq!(p.farmer_agent_id, None),
            other => panic!("unexpected profile {:?}", other),
        }
        match &profiles[6].2 {
            RoleProfile::Driver(p) => assert_eq!(p.approved_by, Some(admin_user_id)),
            other => panic!("unexpected profile {:?}", other),
        }

        let carts = carts.lock().unwrap();
        assert_eq!(carts.len(), 1);
        assert_eq!(carts[0].customer_id, mary_profile_id);
        assert_eq!(carts[0].total_items, 2);
        assert_eq!(carts[0].total_amount, 290.0);
    }

    #[tokio::test]
    async fn test_seed_refuses_when_already_seeded() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(existing_admin())));
        users.expect_create().never();

        let mut marketplace = MockMarketplaceRepository::new();
        marketplace.expect_create_produce().never();

        let uow = TestUnitOfWork::new(users, marketplace);
        let result = Seeder::new(Arc::new(uow), 1).seed().await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_seed_stops_on_first_failure() {
        let calls = Arc::new(Mutex::new(0usize));

        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        let counter = calls.clone();
        users.expect_create().returning(move |new_user| {
            let mut n = counter.lock().unwrap();
            *n += 1;
            if *n == 3 {
                return Err(AppError::conflict("Phone number"));
            }
            Ok(account_from(new_user))
        });

        let mut marketplace = MockMarketplaceRepository::new();
        marketplace.expect_create_produce().never();
        marketplace.expect_create_cart().never();

        let uow = TestUnitOfWork::new(users, marketplace);
        let result = Seeder::new(Arc::new(uow), 1).seed().await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(*calls.lock().unwrap(), 3);
    }
}
