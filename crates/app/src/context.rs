//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        alerts::{AlertsService, PgAlertsService},
        products::{PgProductsService, ProductsService},
        updates::{PgUpdateService, PriceFetcher, StubPriceFetcher, UpdateService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub alerts: Arc<dyn AlertsService>,
    pub updates: Arc<dyn UpdateService>,
}

impl AppContext {
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductsService>,
        alerts: Arc<dyn AlertsService>,
        updates: Arc<dyn UpdateService>,
    ) -> Self {
        Self {
            products,
            alerts,
            updates,
        }
    }

    /// Build application context from a database URL.
    ///
    /// Applies pending schema migrations before serving, mirroring the
    /// create-on-startup behavior of the storage layer.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        let db = Db::new(pool);
        let fetcher: Arc<dyn PriceFetcher> = Arc::new(StubPriceFetcher::new());

        Ok(Self::new(
            Arc::new(PgProductsService::new(db.clone())),
            Arc::new(PgAlertsService::new(db.clone())),
            Arc::new(PgUpdateService::new(db, fetcher)),
        ))
    }
}
