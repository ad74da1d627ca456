//! Product Repositories

mod history;
mod products;

pub(crate) use history::PgHistoryRepository;
pub(crate) use products::PgProductsRepository;
