//! Products

pub mod errors;
pub mod models;
pub(crate) mod repositories;
mod service;

pub use errors::ProductsServiceError;
pub use service::{MockProductsService, PgProductsService, ProductsService};
