//! Alerts

pub mod errors;
pub mod models;
pub(crate) mod repository;
mod service;

pub use errors::AlertsServiceError;
pub use service::{AlertsService, MockAlertsService, PgAlertsService};
