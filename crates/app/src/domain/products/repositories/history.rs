//! Price History Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::products::models::{PriceHistory, PriceHistoryUuid, ProductUuid};

const LIST_HISTORY_SQL: &str = include_str!("../sql/list_history.sql");
const APPEND_HISTORY_SQL: &str = include_str!("../sql/append_history.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgHistoryRepository;

impl PgHistoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// All history rows for a product, oldest first.
    pub(crate) async fn list_history(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<PriceHistory>, sqlx::Error> {
        query_as::<Postgres, PriceHistory>(LIST_HISTORY_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn append_history(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        price: f64,
        now: Timestamp,
    ) -> Result<PriceHistory, sqlx::Error> {
        query_as::<Postgres, PriceHistory>(APPEND_HISTORY_SQL)
            .bind(PriceHistoryUuid::new().into_uuid())
            .bind(product.into_uuid())
            .bind(price)
            .bind(SqlxTimestamp::from(now))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PriceHistory {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PriceHistoryUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            price: row.try_get("price")?,
            recorded_at: row.try_get::<SqlxTimestamp, _>("recorded_at")?.to_jiff(),
        })
    }
}
