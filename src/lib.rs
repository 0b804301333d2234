//! Zuasoko marketplace core.
//!
//! Credential hashing, Kenyan phone normalization, email and role helpers,
//! plus the database schema and a seeder for the demo marketplace.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core value types and pure helpers
//! - **services**: Registration, login and seeding
//! - **infra**: Database, entities and repositories
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations
//! zuasoko migrate up
//!
//! # Reset the schema and load demo data
//! zuasoko seed --fresh
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{
    format_phone_number, hash_password, role_redirect_path, validate_email,
    validate_phone_number, verify_password, Password, PhoneNumber, User, UserRole,
};
pub use errors::{AppError, AppResult};
