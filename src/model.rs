// Core structs: PriceSnapshot, Deal, ProductTrend
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductPrice {
    pub product: String,
    pub price_per_kg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketPrices {
    pub market: String,
    pub products: Vec<ProductPrice>,
}

/// One point-in-time set of prices across markets and products.
///
/// Backed by vectors so iteration follows insertion order
/// (market-then-product), which the deal ranking relies on for
/// stable tie-breaking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSnapshot {
    markets: Vec<MarketPrices>,
}

impl PriceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the price for a (market, product) pair. New markets and
    /// products are appended, existing ones updated in place.
    pub fn insert(&mut self, market: &str, product: &str, price_per_kg: f64) {
        let entry = match self.markets.iter().position(|m| m.market == market) {
            Some(idx) => &mut self.markets[idx],
            None => {
                self.markets.push(MarketPrices {
                    market: market.to_string(),
                    products: Vec::new(),
                });
                self.markets.last_mut().expect("just pushed")
            }
        };
        match entry.products.iter_mut().find(|p| p.product == product) {
            Some(p) => p.price_per_kg = price_per_kg,
            None => entry.products.push(ProductPrice {
                product: product.to_string(),
                price_per_kg,
            }),
        }
    }

    pub fn get(&self, market: &str, product: &str) -> Option<f64> {
        self.markets
            .iter()
            .find(|m| m.market == market)?
            .products
            .iter()
            .find(|p| p.product == product)
            .map(|p| p.price_per_kg)
    }

    pub fn markets(&self) -> &[MarketPrices] {
        &self.markets
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }

    /// Flattens the snapshot into (market, product, price) triples in
    /// insertion order.
    pub fn iter_prices(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.markets.iter().flat_map(|m| {
            m.products
                .iter()
                .map(move |p| (m.market.as_str(), p.product.as_str(), p.price_per_kg))
        })
    }

    /// Product names in first-seen order across all markets.
    pub fn product_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (_, product, _) in self.iter_prices() {
            if !names.contains(&product) {
                names.push(product);
            }
        }
        names
    }
}

/// One (market, product, price) observation ranked for comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub market: String,
    pub product: String,
    pub price_per_kg: f64,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub snapshot: PriceSnapshot,
}

/// Direction of a product's price movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductTrend {
    pub product: String,
    pub value: f64,
}

impl ProductTrend {
    pub fn direction(&self) -> Trend {
        if self.value > 0.0 {
            Trend::Rising
        } else if self.value < 0.0 {
            Trend::Falling
        } else {
            Trend::Stable
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("source unavailable: {0}")]
    Unavailable(String),
    #[error("malformed price data: {0}")]
    MalformedData(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("update interval must be at least 1 second")]
    InvalidInterval,
}
