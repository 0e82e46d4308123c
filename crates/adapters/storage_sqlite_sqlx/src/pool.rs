//! Opening the product database.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// An open product database with the `products` table in place.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database at `url` and apply the
    /// embedded schema. Re-opening an existing file leaves its rows intact.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] for a bad URL or an unreachable
    /// file, [`StorageError::Migration`] if the schema cannot be applied.
    pub async fn open(url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(url, "product database ready");

        Ok(Self { pool })
    }

    /// Private in-memory database, shared by every connection of its pool.
    ///
    /// # Errors
    ///
    /// Same as [`Database::open`].
    pub async fn in_memory() -> Result<Self, StorageError> {
        Self::open("sqlite::memory:").await
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for in-flight statements, then close every connection.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
