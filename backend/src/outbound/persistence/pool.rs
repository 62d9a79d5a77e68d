//! Connection pool for Diesel SQLite connections.
//!
//! SQLite has no async Diesel backend, so the pool hands out synchronous
//! `r2d2` connections and repositories run their Diesel work on the Tokio
//! blocking pool.
//!
//! # Design
//!
//! - Every acquired connection gets foreign keys and a busy timeout enabled.
//! - Checkout respects the configured timeout and pool size.
//! - Embedded migrations ship in the binary and run at startup.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::domain::ports::PersistenceError;

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures while building or using the connection pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection could be checked out within the timeout.
    #[error("connection checkout failed: {message}")]
    Checkout { message: String },

    /// The pool itself could not be constructed.
    #[error("pool construction failed: {message}")]
    Build { message: String },

    /// Pending migrations could not be applied.
    #[error("migration failed: {message}")]
    Migration { message: String },
}

impl PoolError {
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration {
            message: message.into(),
        }
    }
}

impl From<PoolError> for PersistenceError {
    fn from(err: PoolError) -> Self {
        Self::connection(err.to_string())
    }
}

/// Pool settings, built with a small builder chain.
///
/// ```ignore
/// let config = PoolConfig::new("app.db")
///     .with_max_size(8)
///     .with_connection_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Defaults: 8 connections, 30 second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 8,
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Cap the pool size.
    ///
    /// An in-memory database needs `1`: every pooled connection would
    /// otherwise open its own private database.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Enables the pragmas every connection needs before use.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Shared connection pool for SQLite via Diesel.
///
/// Cloning is cheap; every repository holds its own handle.
#[derive(Clone)]
pub struct DbPool {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

impl DbPool {
    /// Build a pool from the given configuration.
    pub fn new(config: &PoolConfig) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<SqliteConnection>::new(config.database_url());
        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(SqlitePragmas))
            .build(manager)
            .map_err(|err| PoolError::build(err.to_string()))?;
        Ok(Self { pool })
    }

    /// Check out a connection.
    ///
    /// Blocks up to the configured timeout; call from the blocking pool.
    pub fn get(
        &self,
    ) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, PoolError> {
        self.pool
            .get()
            .map_err(|err| PoolError::checkout(err.to_string()))
    }

    /// Apply any pending embedded migrations.
    pub fn run_migrations(&self) -> Result<(), PoolError> {
        let mut conn = self.get()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|err| PoolError::migration(err.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_applied() {
        let config = PoolConfig::new("app.db");
        assert_eq!(config.database_url(), "app.db");
        assert_eq!(config.max_size, 8);
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
    }

    #[test]
    fn builders_override_defaults() {
        let config = PoolConfig::new(":memory:")
            .with_max_size(1)
            .with_connection_timeout(Duration::from_secs(5));
        assert_eq!(config.max_size, 1);
        assert_eq!(config.connection_timeout, Duration::from_secs(5));
    }

    #[test]
    fn in_memory_pool_builds_and_migrates() {
        let pool = DbPool::new(&PoolConfig::new(":memory:").with_max_size(1))
            .expect("pool should build");
        pool.run_migrations().expect("migrations should apply");
    }
}
