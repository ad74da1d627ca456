//! Alert Models

use jiff::Timestamp;

use crate::{domain::products::models::ProductUuid, uuids::TypedUuid};

/// Alert UUID
pub type AlertUuid = TypedUuid<Alert>;

/// Alert Model
///
/// Created only by the price update engine when a new historical minimum
/// is observed; never via a direct API create.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub uuid: AlertUuid,
    pub product_uuid: ProductUuid,
    pub price: f64,
    pub triggered_at: Timestamp,
    pub message: Option<String>,
}
