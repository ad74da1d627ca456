//! Update engine errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateServiceError {
    /// The batch could not commit; no partial state is visible.
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
