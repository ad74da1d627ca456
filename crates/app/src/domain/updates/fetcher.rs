//! Price fetching.

use jiff::{Timestamp, tz::TimeZone};
use mockall::automock;

use crate::domain::products::models::Product;

/// Source of current price estimates.
///
/// Returns `None` when no price can be determined; the engine then skips
/// the product without side effects. A real implementation would perform
/// a network fetch and map failures to `None` instead of erroring.
#[automock]
pub trait PriceFetcher: Send + Sync {
    fn fetch(&self, product: &Product) -> Option<f64>;
}

/// Deterministic stand-in for a real scraping client.
///
/// Derives a pseudo-price from the product UUID and the current
/// wall-clock minute, blended with the existing current price (50.0 when
/// unknown). Tests must inject a mock fetcher rather than rely on this
/// formula, since it shifts with real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPriceFetcher;

impl StubPriceFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PriceFetcher for StubPriceFetcher {
    fn fetch(&self, product: &Product) -> Option<f64> {
        let bytes = product.uuid.into_uuid().into_bytes();
        let base = f64::from(u16::from_be_bytes([bytes[14], bytes[15]]) % 100) * 1.11;

        let minute = Timestamp::now().to_zoned(TimeZone::UTC).minute();
        let minute_factor = f64::from(minute % 10) * 0.25;

        let computed = round2(product.current_price.unwrap_or(50.0) * (0.98 + minute_factor / 100.0));

        Some(round2((computed + base) / 2.0))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
