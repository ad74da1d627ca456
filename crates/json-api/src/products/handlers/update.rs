//! Update Product Handler
//!
//! Serves both PUT and PATCH: only fields present in the payload
//! overwrite stored values, so "full replace" is really a partial merge.
//! Carried over deliberately from the reference behavior.

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pricesense_app::domain::products::models::ProductUpdate;

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::get::ProductResponse},
    state::State,
};

/// Update Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    /// New product name
    #[serde(default)]
    pub name: Option<String>,

    /// New product URL
    #[serde(default)]
    pub url: Option<String>,

    /// Updated current price
    #[serde(default)]
    pub current_price: Option<f64>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            url: request.url,
            current_price: request.current_price,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner();

    let detail = state
        .app
        .products
        .update_product(product.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %product, "updated product");

    Ok(Json(detail.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use pricesense_app::domain::products::{MockProductsService, ProductsServiceError, models::ProductUuid};

    use crate::test_helpers::{make_detail, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(
            repo,
            Router::with_path("products/{product}")
                .put(handler)
                .patch(handler),
        )
    }

    #[tokio::test]
    async fn test_update_product_merges_provided_fields() -> TestResult {
        let uuid = ProductUuid::new();

        let mut detail = make_detail(uuid);

        detail.product.current_price = Some(200.0);

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == ProductUpdate {
                            name: None,
                            url: None,
                            current_price: Some(200.0),
                        }
            })
            .return_once(move |_, _| Ok(detail));

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&json!({ "current_price": 200.0 }))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.current_price, Some(200.0));
        assert_eq!(body.name, "Widget", "omitted fields keep stored values");

        Ok(())
    }

    #[tokio::test]
    async fn test_patch_uses_same_merge_semantics() -> TestResult {
        let uuid = ProductUuid::new();

        let mut detail = make_detail(uuid);

        detail.product.name = "Gadget".to_string();

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == ProductUpdate {
                            name: Some("Gadget".to_string()),
                            url: None,
                            current_price: None,
                        }
            })
            .return_once(move |_, _| Ok(detail));

        let mut res = TestClient::patch(format!("http://example.com/products/{uuid}"))
            .json(&json!({ "name": "Gadget" }))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Gadget");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&json!({ "name": "Gadget" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::put("http://example.com/products/123")
            .json(&json!({ "name": "Gadget" }))
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
