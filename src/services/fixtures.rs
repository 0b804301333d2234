//! Demo data loaded by the seeder.
//!
//! Plain constructors only; ids of rows created earlier in the run (agent
//! profile, admin user, farmer profiles) are passed in by the caller.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    AdminProfile, AlertSeverity, CustomerProfile, DriverProfile, DriverStatus, FarmerAgentProfile,
    FarmerProfile, NewCart, NewCartItem, NewMarketPrice, NewProduce, NewWeatherAlert, Produce,
    RoleProfile,
};

pub const ADMIN_EMAIL: &str = "admin@zuasoko.com";

pub const TOMATOES_SLUG: &str = "organic-tomatoes";
pub const SPINACH_SLUG: &str = "fresh-spinach";

/// Login details for a seeded account
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub email: Option<&'static str>,
    pub phone: &'static str,
    pub password: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

pub type SeedAccount = (SeedUser, RoleProfile);

pub fn admin() -> SeedAccount {
    (
        SeedUser {
            email: Some(ADMIN_EMAIL),
            phone: "254712345678",
            password: "admin123",
            first_name: "Admin",
            last_name: "User",
        },
        RoleProfile::Admin(AdminProfile::full_access()),
    )
}

pub fn farmer_agent() -> SeedAccount {
    (
        SeedUser {
            email: Some("agent@zuasoko.com"),
            phone: "254723456789",
            password: "agent123",
            first_name: "John",
            last_name: "Agent",
        },
        RoleProfile::FarmerAgent(FarmerAgentProfile {
            assigned_county: "Kiambu".to_string(),
            onboarding_quota: 50,
        }),
    )
}

/// Two subscribed farmers; the first was onboarded by `agent_profile_id`.
pub fn farmers(agent_profile_id: Uuid, now: DateTime<Utc>) -> [SeedAccount; 2] {
    [
        (
            SeedUser {
                email: Some("farmer1@zuasoko.com"),
                phone: "254734567890",
                password: "farmer123",
                first_name: "Jane",
                last_name: "Farmer",
            },
            RoleProfile::Farmer(FarmerProfile {
                farm_name: "Green Valley Farm".to_string(),
                county: "Kiambu".to_string(),
                sub_county: Some("Kikuyu".to_string()),
                farm_size: 5.5,
                kra_pin: Some("A123456789K".to_string()),
                latitude: Some(-1.2921),
                longitude: Some(36.8219),
                subscription_paid: true,
                subscription_date: Some(now),
                farmer_agent_id: Some(agent_profile_id),
            }),
        ),
        (
            SeedUser {
                email: None,
                phone: "254745678901",
                password: "farmer123",
                first_name: "Peter",
                last_name: "Mwangi",
            },
            RoleProfile::Farmer(FarmerProfile {
                farm_name: "Sunrise Organic Farm".to_string(),
                county: "Nakuru".to_string(),
                sub_county: None,
                farm_size: 10.0,
                kra_pin: None,
                latitude: Some(-0.3031),
                longitude: Some(36.08),
                subscription_paid: true,
                subscription_date: Some(now),
                farmer_agent_id: None,
            }),
        ),
    ]
}

pub fn customers() -> [SeedAccount; 2] {
    [
        (
            SeedUser {
                email: Some("customer1@example.com"),
                phone: "254756789012",
                password: "customer123",
                first_name: "Mary",
                last_name: "Customer",
            },
            RoleProfile::Customer(CustomerProfile {
                county: "Nairobi".to_string(),
                latitude: Some(-1.2921),
                longitude: Some(36.8219),
                loyalty_points: 150,
            }),
        ),
        (
            SeedUser {
                email: None,
                phone: "254767890123",
                password: "customer123",
                first_name: "David",
                last_name: "Buyer",
            },
            RoleProfile::Customer(CustomerProfile {
                county: "Mombasa".to_string(),
                latitude: Some(-4.0435),
                longitude: Some(39.6682),
                loyalty_points: 0,
            }),
        ),
    ]
}

/// An available driver already vetted by `admin_user_id`.
pub fn driver(admin_user_id: Uuid, now: DateTime<Utc>) -> SeedAccount {
    let profile = DriverProfile {
        license_number: "DL001234567".to_string(),
        vehicle_type: "Pickup Truck".to_string(),
        vehicle_reg_no: "KCA123A".to_string(),
        id_number: "12345678".to_string(),
        status: DriverStatus::Pending,
        approved_at: None,
        approved_by: None,
        is_available: true,
        total_deliveries: 25,
        rating: 4.7,
    }
    .approve(admin_user_id, now);

    (
        SeedUser {
            email: None,
            phone: "254778901234",
            password: "driver123",
            first_name: "Michael",
            last_name: "Driver",
        },
        RoleProfile::Driver(profile),
    )
}

#[allow(clippy::too_many_arguments)]
fn listing(
    farmer_id: Uuid,
    name: &str,
    category: &str,
    quantity: f64,
    unit: &str,
    price_per_unit: f64,
    description: &str,
    is_featured: bool,
    slug: &str,
    tags: &[&str],
    now: DateTime<Utc>,
    shelf_life_days: i64,
) -> NewProduce {
    NewProduce {
        farmer_id,
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        unit: unit.to_string(),
        price_per_unit,
        description: description.to_string(),
        stock_quantity: quantity,
        is_approved: true,
        is_featured,
        slug: slug.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        harvest_date: now,
        expiry_date: now + Duration::days(shelf_life_days),
    }
}

/// Four approved listings, two per farmer.
pub fn produce(first_farmer: Uuid, second_farmer: Uuid, now: DateTime<Utc>) -> [NewProduce; 4] {
    [
        listing(
            first_farmer,
            "Organic Tomatoes",
            "Vegetables",
            100.0,
            "kg",
            120.0,
            "Fresh organic tomatoes, vine-ripened and pesticide-free",
            true,
            TOMATOES_SLUG,
            &["organic", "fresh", "vegetables", "tomatoes"],
            now,
            7,
        ),
        listing(
            first_farmer,
            "Sweet Potatoes",
            "Root Vegetables",
            50.0,
            "kg",
            80.0,
            "Nutritious orange-fleshed sweet potatoes",
            false,
            "sweet-potatoes",
            &["sweet-potatoes", "nutritious", "root-vegetables"],
            now,
            14,
        ),
        listing(
            second_farmer,
            "Fresh Spinach",
            "Leafy Greens",
            30.0,
            "bunches",
            50.0,
            "Crisp and fresh spinach leaves, rich in iron",
            true,
            SPINACH_SLUG,
            &["spinach", "leafy-greens", "iron-rich"],
            now,
            3,
        ),
        listing(
            second_farmer,
            "Carrots",
            "Root Vegetables",
            75.0,
            "kg",
            90.0,
            "Fresh orange carrots, perfect for cooking and snacking",
            false,
            "fresh-carrots",
            &["carrots", "root-vegetables", "vitamin-a"],
            now,
            21,
        ),
    ]
}

pub fn market_prices(now: DateTime<Utc>) -> [NewMarketPrice; 2] {
    [
        NewMarketPrice {
            produce: "Tomatoes".to_string(),
            county: "Kiambu".to_string(),
            avg_price: 110.0,
            min_price: 90.0,
            max_price: 130.0,
            market_name: "Kiambu Market".to_string(),
            report_date: now,
        },
        NewMarketPrice {
            produce: "Sweet Potatoes".to_string(),
            county: "Nakuru".to_string(),
            avg_price: 75.0,
            min_price: 60.0,
            max_price: 90.0,
            market_name: "Nakuru Market".to_string(),
            report_date: now,
        },
    ]
}

pub fn weather_alert(now: DateTime<Utc>) -> NewWeatherAlert {
    NewWeatherAlert {
        county: "Kiambu".to_string(),
        alert_type: "RAIN".to_string(),
        severity: AlertSeverity::Medium,
        message: "Moderate rainfall expected in the next 3 days. Good for planting.".to_string(),
        start_date: now,
        end_date: now + Duration::days(3),
    }
}

/// Two tomatoes and one spinach bunch at their listed prices.
pub fn cart(customer_id: Uuid, tomatoes: &Produce, spinach: &Produce) -> NewCart {
    NewCart {
        customer_id,
        items: vec![
            NewCartItem {
                produce_id: tomatoes.id,
                quantity: 2,
                price_per_unit: tomatoes.price_per_unit,
            },
            NewCartItem {
                produce_id: spinach.id,
                quantity: 1,
                price_per_unit: spinach.price_per_unit,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_phone_number;

    #[test]
    fn test_fixture_phones_are_valid() {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let mut accounts = vec![admin(), farmer_agent(), driver(id, now)];
        accounts.extend(farmers(id, now));
        accounts.extend(customers());

        for (user, _) in accounts {
            assert!(validate_phone_number(user.phone), "{}", user.phone);
        }
    }

    #[test]
    fn test_produce_fixtures_validate() {
        let now = Utc::now();
        for listing in produce(Uuid::new_v4(), Uuid::new_v4(), now) {
            assert!(listing.validate().is_ok(), "{}", listing.slug);
        }
    }

    #[test]
    fn test_market_prices_validate() {
        for price in market_prices(Utc::now()) {
            assert!(price.validate().is_ok());
        }
    }

    #[test]
    fn test_driver_is_approved_by_admin() {
        let admin_id = Uuid::new_v4();
        let (_, profile) = driver(admin_id, Utc::now());
        match profile {
            RoleProfile::Driver(p) => {
                assert_eq!(p.status, DriverStatus::Approved);
                assert_eq!(p.approved_by, Some(admin_id));
            }
            other => panic!("unexpected profile {:?}", other),
        }
    }
}
