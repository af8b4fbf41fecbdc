//! MySQL connection pooling over SQLx.

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    ConnectOptions, MySqlPool, Row,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use pf_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Shared handle to the MySQL pool.
///
/// Cloning is cheap; every clone drains into the same pool. Sizing and
/// timeouts come from [`DatabaseConfig`].
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connect to MySQL and build the pool.
    ///
    /// Fails when the URL does not parse or no connection can be
    /// established within the configured timeout.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            "Opening MySQL pool ({} connections max)",
            config.max_connections
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options(&config)?)
            .await
            .map_err(|e| {
                tracing::error!("Failed to open MySQL pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!("MySQL pool ready");
        Ok(Self { pool })
    }

    /// The underlying SQLx pool, for queries and transactions.
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trip a trivial query to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let row = sqlx::query("SELECT 1 as alive")
            .fetch_one(&self.pool)
            .await
            .map_err(InfrastructureError::Database)?;

        let alive: i32 = row.try_get("alive").map_err(InfrastructureError::Database)?;
        Ok(alive == 1)
    }

    /// Drain the pool; called on shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing MySQL pool");
        self.pool.close().await;
    }
}

fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, InfrastructureError> {
    let options = MySqlConnectOptions::from_str(&config.url)
        .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?;

    Ok(if config.enable_logging {
        options
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1))
    } else {
        options.log_statements(LevelFilter::Off)
    })
}
