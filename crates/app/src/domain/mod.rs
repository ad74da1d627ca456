//! Domain modules.

pub mod alerts;
pub mod products;
pub mod updates;
