//! Application state for cafe-api

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, cloned into every handler.
///
/// Replaces process-wide app/db singletons: the pool and the delete secret
/// travel together as an explicit dependency.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Secret key required by the delete endpoint
    pub api_key: String,
}

impl AppState {
    /// Create a new AppState: connect the pool and ensure the schema exists
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = SqlitePool::connect(&config.database_url).await?;

        db::cafes::ensure_schema(&pool).await?;

        Ok(Self {
            pool,
            api_key: config.api_key.clone(),
        })
    }
}
