use crate::{DbError, Result as DbErrorResult, SqliteAccountStore, StoreConnector};

use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens SQLite-backed account stores from a connection string such as
/// `sqlite://data/sms.db` or `sqlite::memory:`.
#[derive(Debug, Clone)]
pub struct SqliteConnector {
    url: String,
}

impl SqliteConnector {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    #[track_caller]
    fn connect_options(&self) -> DbErrorResult<SqliteConnectOptions> {
        let options = SqliteConnectOptions::from_str(&self.url).map_err(|e| {
            DbError::StoreUnavailable {
                message: format!("Invalid connection string: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(options.create_if_missing(true).busy_timeout(BUSY_TIMEOUT))
    }

    async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::StoreUnavailable {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }
}

#[async_trait]
impl StoreConnector for SqliteConnector {
    type Store = SqliteAccountStore;

    async fn connect(&self) -> DbErrorResult<SqliteAccountStore> {
        let options = self.connect_options()?;

        // One run, one connection. An in-memory database is also private to
        // its connection, so a larger pool would see empty databases.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| DbError::StoreUnavailable {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Err(e) = Self::run_migrations(&pool).await {
            pool.close().await;
            return Err(e);
        }

        debug!("Account store connected");

        Ok(SqliteAccountStore::new(pool))
    }
}
