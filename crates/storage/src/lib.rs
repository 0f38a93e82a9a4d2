//! Persistence for the competition catalog: competitions, project
//! categories ("types") and the competition to project links.

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

use std::time::Duration;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use crate::error::Result;

pub use error::StorageError;

/// Migrations embedded from `crates/storage/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect_with(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        tracing::debug!(
            "Opening pool (max_connections={}, acquire_timeout={:?})",
            max_connections,
            acquire_timeout
        );
        let pool = Self::pool_options(max_connections, acquire_timeout)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool_options(max_connections: u32, acquire_timeout: Duration) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_options_carry_settings() {
        let options = Database::pool_options(12, Duration::from_secs(7));
        assert_eq!(options.get_max_connections(), 12);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(7));
    }
}
