use crate::core::{AppError, Result};
use serde::Deserialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use super::{parse_or_default, Lookup};

/// Connection settings for the shared MySQL pool used by both stores
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self> {
        Ok(DatabaseConfig {
            url: lookup("DATABASE_URL")
                .ok_or_else(|| AppError::Configuration("DATABASE_URL not set".to_string()))?,
            pool_size: parse_or_default(lookup, "DATABASE_POOL_SIZE", 5)?,
            max_connections: parse_or_default(lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            acquire_timeout_secs: parse_or_default(lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS", 30)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(AppError::Configuration(
                "DATABASE_POOL_SIZE must be greater than 0".to_string(),
            ));
        }

        if self.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.pool_size > self.max_connections {
            return Err(AppError::Configuration(format!(
                "DATABASE_POOL_SIZE ({}) cannot exceed DATABASE_MAX_CONNECTIONS ({})",
                self.pool_size, self.max_connections
            )));
        }

        Ok(())
    }

    /// Create a MySQL connection pool
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            .test_before_acquire(true)
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }
}
