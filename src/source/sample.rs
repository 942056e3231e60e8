use crate::model::{FetchError, PriceSnapshot};
use crate::source::PriceSource;

/// Deterministic source returning a fixed snapshot of the three Nuevo
/// León chains. Stands in for the real per-chain scrapers, which would
/// implement the same trait with an HTTP client behind them.
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sample_snapshot() -> PriceSnapshot {
    let mut snapshot = PriceSnapshot::new();
    snapshot.insert("HEB", "Res", 180.50);
    snapshot.insert("HEB", "Cerdo", 120.30);
    snapshot.insert("HEB", "Pollo", 89.90);
    snapshot.insert("Soriana", "Res", 175.90);
    snapshot.insert("Soriana", "Cerdo", 118.50);
    snapshot.insert("Soriana", "Pollo", 85.50);
    snapshot.insert("Walmart", "Res", 178.30);
    snapshot.insert("Walmart", "Cerdo", 122.40);
    snapshot.insert("Walmart", "Pollo", 88.70);
    snapshot
}

#[async_trait::async_trait]
impl PriceSource for SampleSource {
    async fn fetch(&self) -> Result<PriceSnapshot, FetchError> {
        Ok(sample_snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_returns_three_markets_with_three_products_each() {
        let snapshot = SampleSource::new().fetch().await.unwrap();
        assert_eq!(snapshot.markets().len(), 3);
        for market in snapshot.markets() {
            assert_eq!(market.products.len(), 3);
        }
        assert_eq!(snapshot.get("Soriana", "Pollo"), Some(85.50));
        assert_eq!(snapshot.get("HEB", "Res"), Some(180.50));
    }
}
