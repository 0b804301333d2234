//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `seed` - Demo data loading

pub mod args;

pub use args::{Cli, Commands};
