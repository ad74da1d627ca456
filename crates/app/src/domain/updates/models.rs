//! Update Batch Models

/// Outcome of one batch run over all products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateSummary {
    /// Products examined, including skipped ones.
    pub processed: usize,
    /// Products whose price changed and was recorded.
    pub updated: usize,
    /// Alerts materialized during this run.
    pub alerts_created: usize,
}
