//! Product Models

use jiff::Timestamp;

use crate::{domain::alerts::models::Alert, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Price History UUID
pub type PriceHistoryUuid = TypedUuid<PriceHistory>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub url: Option<String>,
    /// Latest known price, `None` while unknown.
    pub current_price: Option<f64>,
    pub last_checked: Timestamp,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub url: Option<String>,
    pub current_price: Option<f64>,
}

/// Product Update Model
///
/// Fields left as `None` keep their stored value; both PUT and PATCH merge
/// this way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub current_price: Option<f64>,
}

/// Price History Model
///
/// Append-only timestamped price observation for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    pub uuid: PriceHistoryUuid,
    pub product_uuid: ProductUuid,
    pub price: f64,
    pub recorded_at: Timestamp,
}

/// Product with its nested price history (ascending) and alerts
/// (descending) for read endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub history: Vec<PriceHistory>,
    pub alerts: Vec<Alert>,
}
