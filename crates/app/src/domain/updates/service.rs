//! Update batch service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        alerts::repository::PgAlertsRepository,
        products::repositories::{PgHistoryRepository, PgProductsRepository},
        updates::{
            decision,
            errors::UpdateServiceError,
            fetcher::PriceFetcher,
            models::UpdateSummary,
        },
    },
};

#[derive(Clone)]
pub struct PgUpdateService {
    db: Db,
    products: PgProductsRepository,
    history: PgHistoryRepository,
    alerts: PgAlertsRepository,
    fetcher: Arc<dyn PriceFetcher>,
}

impl PgUpdateService {
    #[must_use]
    pub fn new(db: Db, fetcher: Arc<dyn PriceFetcher>) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            history: PgHistoryRepository::new(),
            alerts: PgAlertsRepository::new(),
            fetcher,
        }
    }
}

#[async_trait]
impl UpdateService for PgUpdateService {
    async fn run_update_batch(&self) -> Result<UpdateSummary, UpdateServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.products.list_products(&mut tx).await?;

        let mut summary = UpdateSummary {
            processed: products.len(),
            ..UpdateSummary::default()
        };

        for product in &products {
            let fetched = self.fetcher.fetch(product);

            // Prior prices are captured before any mutation; the new price
            // is never part of the set it is compared against.
            let prior_history: Vec<f64> = self
                .history
                .list_history(&mut tx, product.uuid)
                .await?
                .iter()
                .map(|entry| entry.price)
                .collect();

            let Some(decision) = decision::decide(product.current_price, &prior_history, fetched)
            else {
                debug!(product = %product.uuid, "no price change, skipping");
                continue;
            };

            let now = Timestamp::now();

            self.products
                .record_price(&mut tx, product.uuid, decision.new_price, now)
                .await?;

            self.history
                .append_history(&mut tx, product.uuid, decision.new_price, now)
                .await?;

            if decision.alert {
                let message = format!("New lowest price detected: {}", decision.new_price);

                self.alerts
                    .create_alert(&mut tx, product.uuid, decision.new_price, Some(message), now)
                    .await?;

                summary.alerts_created += 1;
            }

            summary.updated += 1;
        }

        tx.commit().await?;

        info!(
            processed = summary.processed,
            updated = summary.updated,
            alerts_created = summary.alerts_created,
            "update batch finished"
        );

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait UpdateService: Send + Sync {
    /// Re-fetch prices for all products, recording history rows for
    /// changed prices and alerts for new historical minimums. The whole
    /// batch commits as one unit.
    async fn run_update_batch(&self) -> Result<UpdateSummary, UpdateServiceError>;
}
