//! PostgreSQL backing for applications, renewals and the renewal window
//!
//! [`Database`] owns the pool. The schema ships with the binary through
//! `sqlx::migrate!` and is applied at startup before any store is built.

use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Failures opening, migrating or probing the scholarship database
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("cannot open scholarship database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("scholarship schema migration failed: {0}")]
    Migrate(#[from] MigrateError),

    #[error("scholarship database unreachable: {0}")]
    Unreachable(#[source] sqlx::Error),
}

/// Shared handle to the scholarship database
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Opens a pool of at most `max_connections` connections
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(DbError::Connect)?;

        tracing::info!(max_connections, "Scholarship database pool open");
        Ok(Self { pool })
    }

    /// Creates or upgrades the `application`, `renew` and
    /// `renewal_settings` tables
    pub async fn migrate(&self) -> Result<(), DbError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Scholarship schema up to date");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round trip used by `GET /health`
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DbError::Unreachable)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_name_the_failing_step() {
        let err = DbError::Connect(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("cannot open scholarship database"));

        let err = DbError::Unreachable(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("scholarship database unreachable"));
    }
}
