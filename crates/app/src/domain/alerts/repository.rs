//! Alerts Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    alerts::models::{Alert, AlertUuid},
    products::models::ProductUuid,
};

const LIST_ALERTS_SQL: &str = include_str!("sql/list_alerts.sql");
const LIST_PRODUCT_ALERTS_SQL: &str = include_str!("sql/list_product_alerts.sql");
const CREATE_ALERT_SQL: &str = include_str!("sql/create_alert.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAlertsRepository;

impl PgAlertsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// All alerts across products, newest trigger first.
    pub(crate) async fn list_alerts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Alert>, sqlx::Error> {
        query_as::<Postgres, Alert>(LIST_ALERTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_product_alerts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<Alert>, sqlx::Error> {
        query_as::<Postgres, Alert>(LIST_PRODUCT_ALERTS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_alert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        price: f64,
        message: Option<String>,
        now: Timestamp,
    ) -> Result<Alert, sqlx::Error> {
        query_as::<Postgres, Alert>(CREATE_ALERT_SQL)
            .bind(AlertUuid::new().into_uuid())
            .bind(product.into_uuid())
            .bind(price)
            .bind(SqlxTimestamp::from(now))
            .bind(message)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Alert {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AlertUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            price: row.try_get("price")?,
            triggered_at: row.try_get::<SqlxTimestamp, _>("triggered_at")?.to_jiff(),
            message: row.try_get("message")?,
        })
    }
}
