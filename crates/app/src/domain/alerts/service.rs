//! Alerts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::alerts::{errors::AlertsServiceError, models::Alert, repository::PgAlertsRepository},
};

#[derive(Debug, Clone)]
pub struct PgAlertsService {
    db: Db,
    repository: PgAlertsRepository,
}

impl PgAlertsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAlertsRepository::new(),
        }
    }
}

#[async_trait]
impl AlertsService for PgAlertsService {
    async fn list_alerts(&self) -> Result<Vec<Alert>, AlertsServiceError> {
        let mut tx = self.db.begin().await?;

        let alerts = self.repository.list_alerts(&mut tx).await?;

        tx.commit().await?;

        Ok(alerts)
    }
}

#[automock]
#[async_trait]
pub trait AlertsService: Send + Sync {
    /// All alerts across products, most recently triggered first.
    async fn list_alerts(&self) -> Result<Vec<Alert>, AlertsServiceError>;
}
