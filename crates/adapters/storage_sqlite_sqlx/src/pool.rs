//! Opens the plant database and brings its schema up to date.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};

use crate::error::StorageError;

/// Where the plant store keeps its rows.
pub struct Config {
    /// `SQLite` URL, e.g. `sqlite:plants.db?mode=rwc` for a file or
    /// `sqlite::memory:` for a throwaway store.
    pub database_url: String,
}

impl Config {
    /// Open the plant database, creating the file on first start, and
    /// apply the `plants` schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is malformed, the file cannot be
    /// opened, or a migration fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url).await
    }
}

/// An open plant database.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn initialize(database_url: &str) -> Result<Self, StorageError> {
        let mut options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // File-backed stores serve reads alongside a PATCH or DELETE in flight.
        if !is_in_memory(database_url) {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(database_url, "plant database ready");

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
