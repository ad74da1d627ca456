//! Alerts service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlertsServiceError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
