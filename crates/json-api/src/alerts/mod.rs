//! Alerts

pub(crate) mod index;
