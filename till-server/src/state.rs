//! Application state shared by every handler

use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::business_day::BusinessDateResolver;
use crate::config::Config;
use crate::error::BoxError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    pub config: Arc<Config>,
    /// Business-date resolver built from the configured zone and rollover rule
    pub resolver: BusinessDateResolver,
}

impl AppState {
    /// Connect to the database, run pending migrations and build the state.
    pub async fn new(config: Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Self::from_parts(pool, config)
    }

    /// Build the state around an existing pool (no connection is made).
    pub fn from_parts(pool: PgPool, config: Config) -> Result<Self, BoxError> {
        let resolver = BusinessDateResolver::new(config.timezone, config.rollover_rule())?;
        Ok(Self {
            pool,
            config: Arc::new(config),
            resolver,
        })
    }
}
