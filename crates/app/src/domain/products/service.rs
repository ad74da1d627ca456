//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::{
        alerts::repository::PgAlertsRepository,
        products::{
            errors::ProductsServiceError,
            models::{NewProduct, PriceHistory, Product, ProductDetail, ProductUpdate, ProductUuid},
            repositories::{PgHistoryRepository, PgProductsRepository},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    products: PgProductsRepository,
    history: PgHistoryRepository,
    alerts: PgAlertsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            history: PgHistoryRepository::new(),
            alerts: PgAlertsRepository::new(),
        }
    }

    async fn load_detail(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: Product,
    ) -> Result<ProductDetail, ProductsServiceError> {
        let history = self.history.list_history(tx, product.uuid).await?;
        let alerts = self.alerts.list_product_alerts(tx, product.uuid).await?;

        Ok(ProductDetail {
            product,
            history,
            alerts,
        })
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductDetail>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.products.list_products(&mut tx).await?;

        let mut details = Vec::with_capacity(products.len());

        for product in products {
            details.push(self.load_detail(&mut tx, product).await?);
        }

        tx.commit().await?;

        Ok(details)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductDetail, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.products.get_product(&mut tx, product).await?;
        let detail = self.load_detail(&mut tx, product).await?;

        tx.commit().await?;

        Ok(detail)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductDetail, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let uuid = ProductUuid::new();
        let now = Timestamp::now();

        let created = self
            .products
            .create_product(&mut tx, uuid, &product, now)
            .await?;

        // An initial price seeds one history row; no alert evaluation at
        // creation time.
        let mut history = Vec::new();

        if let Some(price) = product.current_price {
            history.push(self.history.append_history(&mut tx, uuid, price, now).await?);
        }

        tx.commit().await?;

        Ok(ProductDetail {
            product: created,
            history,
            alerts: Vec::new(),
        })
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductDetail, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .products
            .update_product(&mut tx, product, &update, Timestamp::now())
            .await?;

        let detail = self.load_detail(&mut tx, updated).await?;

        tx.commit().await?;

        Ok(detail)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.products.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn list_history(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<PriceHistory>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        // 404 for an unknown product, not an empty list.
        self.products.get_product(&mut tx, product).await?;

        let history = self.history.list_history(&mut tx, product).await?;

        tx.commit().await?;

        Ok(history)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products with nested history and alerts.
    async fn list_products(&self) -> Result<Vec<ProductDetail>, ProductsServiceError>;

    /// Retrieve a single product with nested history and alerts.
    async fn get_product(&self, product: ProductUuid)
    -> Result<ProductDetail, ProductsServiceError>;

    /// Creates a new product, seeding one history row when an initial
    /// price is given.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductDetail, ProductsServiceError>;

    /// Merges the non-null fields of the update into the stored product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductDetail, ProductsServiceError>;

    /// Deletes a product and, via cascade, its history and alerts.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Price history for a product, oldest first.
    async fn list_history(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<PriceHistory>, ProductsServiceError>;
}
