//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL, DEFAULT_PASSWORD_HASH_COST,
    MAX_PASSWORD_HASH_COST, MIN_PASSWORD_HASH_COST,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub password_hash_cost: u32,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("password_hash_cost", &self.password_hash_cost)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    /// Returns a config error if a numeric variable does not parse or the
    /// hash cost is outside the accepted range.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using development default");
            DEFAULT_DATABASE_URL.to_string()
        });

        let database_max_connections = parse_var(
            "DATABASE_MAX_CONNECTIONS",
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;

        let password_hash_cost = parse_var(
            "PASSWORD_HASH_COST",
            env::var("PASSWORD_HASH_COST").ok(),
            DEFAULT_PASSWORD_HASH_COST,
        )?;

        let config = Self {
            database_url,
            database_max_connections,
            password_hash_cost,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if !(MIN_PASSWORD_HASH_COST..=MAX_PASSWORD_HASH_COST).contains(&self.password_hash_cost) {
            return Err(AppError::config(format!(
                "PASSWORD_HASH_COST must be between {} and {}",
                MIN_PASSWORD_HASH_COST, MAX_PASSWORD_HASH_COST
            )));
        }
        if self.database_max_connections == 0 {
            return Err(AppError::config("DATABASE_MAX_CONNECTIONS must be positive"));
        }
        Ok(())
    }
}

fn parse_var(name: &str, raw: Option<String>, default: u32) -> AppResult<u32> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{} must be an unsigned integer, got {:?}", name, value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_uses_default_when_unset() {
        assert_eq!(parse_var("X", None, 7).unwrap(), 7);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        let err = parse_var("PASSWORD_HASH_COST", Some("twelve".into()), 12).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_out_of_range_cost() {
        let config = Config {
            password_hash_cost: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            password_hash_cost: MAX_PASSWORD_HASH_COST + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().password_hash_cost, 12);
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let output = format!("{:?}", Config::default());
        assert!(!output.contains("postgres://"));
        assert!(output.contains("[REDACTED]"));
    }
}
