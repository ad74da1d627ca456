//! Product Price History Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pricesense_app::domain::products::models::PriceHistory;

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceHistoryResponse {
    /// Unique identifier of the history row
    pub uuid: Uuid,

    /// Product this observation belongs to
    pub product_uuid: Uuid,

    /// Recorded price value
    pub price: f64,

    /// When the price was recorded
    pub recorded_at: String,
}

impl From<PriceHistory> for PriceHistoryResponse {
    fn from(entry: PriceHistory) -> Self {
        PriceHistoryResponse {
            uuid: entry.uuid.into(),
            product_uuid: entry.product_uuid.into(),
            price: entry.price,
            recorded_at: entry.recorded_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceHistoryListResponse {
    /// Price observations, oldest first
    pub history: Vec<PriceHistoryResponse>,
}

/// Product Price History Handler
///
/// Returns all price observations for a product ordered by timestamp
/// ascending; 404 when the product does not exist.
#[endpoint(
    tags("products"),
    summary = "Get Product Price History",
    responses(
        (status_code = StatusCode::OK, description = "Price history"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PriceHistoryListResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let history = state
        .app
        .products
        .list_history(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(PriceHistoryListResponse {
        history: history.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pricesense_app::domain::products::{
        MockProductsService, ProductsServiceError,
        models::{PriceHistory, PriceHistoryUuid, ProductUuid},
    };

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(
            repo,
            Router::with_path("products/{product}/history").get(handler),
        )
    }

    fn make_entry(
        product: ProductUuid,
        price: f64,
        recorded_at: &str,
    ) -> Result<PriceHistory, jiff::Error> {
        Ok(PriceHistory {
            uuid: PriceHistoryUuid::new(),
            product_uuid: product,
            price,
            recorded_at: recorded_at.parse::<Timestamp>()?,
        })
    }

    #[tokio::test]
    async fn test_history_preserves_ascending_order() -> TestResult {
        let uuid = ProductUuid::new();

        let oldest = make_entry(uuid, 100.0, "2026-08-01T00:00:00Z")?;
        let newest = make_entry(uuid, 90.0, "2026-08-02T00:00:00Z")?;

        let mut repo = MockProductsService::new();

        repo.expect_list_history()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(vec![oldest, newest]));

        let response: PriceHistoryListResponse =
            TestClient::get(format!("http://example.com/products/{uuid}/history"))
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        assert_eq!(response.history.len(), 2);
        assert_eq!(response.history[0].price, 100.0);
        assert_eq!(response.history[1].price, 90.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_history_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_list_history()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{uuid}/history"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
