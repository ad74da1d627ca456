//! Fetch Latest Prices Job Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use pricesense_app::domain::updates::models::UpdateSummary;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateSummaryResponse {
    /// Products examined, including skipped ones
    pub processed: usize,

    /// Products whose price changed and was recorded
    pub updated: usize,

    /// Alerts created during this run
    pub alerts_created: usize,
}

impl From<UpdateSummary> for UpdateSummaryResponse {
    fn from(summary: UpdateSummary) -> Self {
        UpdateSummaryResponse {
            processed: summary.processed,
            updated: summary.updated,
            alerts_created: summary.alerts_created,
        }
    }
}

/// Fetch Latest Prices Job Handler
///
/// Runs the update batch over all products: fetches each one's latest
/// price, appends a history row when it changed, and creates an alert
/// when the new price is a historical minimum. All side effects commit
/// as one unit.
#[endpoint(
    tags("jobs"),
    summary = "Fetch Latest Prices",
    responses(
        (status_code = StatusCode::OK, description = "Batch summary"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<UpdateSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .app
        .updates
        .run_update_batch()
        .await
        .or_500("update batch failed")?;

    Ok(Json(summary.into()))
}
