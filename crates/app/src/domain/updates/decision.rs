//! Per-product update decisions.
//!
//! Pure functions holding the batch's business rules, kept free of any
//! storage access so they can be tested directly.

/// What the engine should do for one product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Decision {
    /// Price to store and append to history.
    pub(crate) new_price: f64,
    /// Whether the new price is a historical minimum.
    pub(crate) alert: bool,
}

/// Decide whether a fetched price constitutes a change.
///
/// Returns `None` when the fetcher gave up or the price is exactly equal
/// to the stored one; an absent stored price counts as different from any
/// fetched value. The alert decision uses only prices known before this
/// observation: the existing history plus the old current price.
pub(crate) fn decide(
    current_price: Option<f64>,
    prior_history: &[f64],
    fetched: Option<f64>,
) -> Option<Decision> {
    let fetched = fetched?;

    if current_price == Some(fetched) {
        return None;
    }

    let mut prior: Vec<f64> = prior_history.to_vec();

    if let Some(current) = current_price {
        prior.push(current);
    }

    Some(Decision {
        new_price: fetched,
        alert: is_new_minimum(&prior, fetched),
    })
}

/// True when `new_price` is strictly below every previously known price,
/// or when nothing is known yet. Over-alerting is preferred to missing a
/// price drop.
pub(crate) fn is_new_minimum(prior_prices: &[f64], new_price: f64) -> bool {
    match prior_prices.iter().copied().reduce(f64::min) {
        None => true,
        Some(min) => new_price < min,
    }
}
