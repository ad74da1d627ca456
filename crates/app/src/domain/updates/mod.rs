//! Price update engine.

mod decision;
pub mod errors;
mod fetcher;
pub mod models;
mod service;

pub use errors::UpdateServiceError;
pub use fetcher::{MockPriceFetcher, PriceFetcher, StubPriceFetcher};
pub use service::{MockUpdateService, PgUpdateService, UpdateService};
