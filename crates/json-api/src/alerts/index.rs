//! Alert Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pricesense_app::domain::alerts::models::Alert;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AlertResponse {
    /// Unique identifier of the alert
    pub uuid: Uuid,

    /// Product this alert is for
    pub product_uuid: Uuid,

    /// Price when the alert was triggered
    pub price: f64,

    /// When the alert was triggered
    pub triggered_at: String,

    /// Details about the alert
    pub message: Option<String>,
}

impl From<Alert> for AlertResponse {
    fn from(alert: Alert) -> Self {
        AlertResponse {
            uuid: alert.uuid.into(),
            product_uuid: alert.product_uuid.into(),
            price: alert.price,
            triggered_at: alert.triggered_at.to_string(),
            message: alert.message,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AlertsResponse {
    /// Alerts across all products, most recently triggered first
    pub alerts: Vec<AlertResponse>,
}

/// Alert Index Handler
///
/// Returns all alerts ordered by trigger time descending.
#[endpoint(tags("alerts"), summary = "List Alerts")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AlertsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let alerts = state
        .app
        .alerts
        .list_alerts()
        .await
        .or_500("failed to fetch alerts")?;

    Ok(Json(AlertsResponse {
        alerts: alerts.into_iter().map(Into::into).collect(),
    }))
}
