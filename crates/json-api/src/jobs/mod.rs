//! Maintenance jobs

pub(crate) mod fetch_latest;
