//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod marketplace_repository;
mod user_repository;

pub use marketplace_repository::{MarketplaceRepository, MarketplaceStore};
pub use user_repository::{UserRepository, UserStore};

pub(crate) use marketplace_repository::insert_cart_with_items;
pub(crate) use user_repository::insert_user_with_profile;

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use marketplace_repository::MockMarketplaceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
