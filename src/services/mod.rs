//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure through the
//! `UnitOfWork` abstraction so they can be tested against mocked repositories.

mod auth_service;
mod credentials;
pub mod fixtures;
mod seed_service;

pub use auth_service::{AuthService, Authenticator, LoginOutcome, Registration};
pub use credentials::{hash_password_blocking, verify_password_blocking};
pub use seed_service::{SeedReport, SeedService, Seeder};
