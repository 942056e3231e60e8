use crate::config::DEFAULT_UPDATE_INTERVAL_SECS;
use crate::market::MarketData;
use crate::source::PriceSource;
use std::time::Duration;
use tracing::{debug, warn};

/// Drives a PriceSource on behalf of the poll loop and writes what it
/// fetches into MarketData.
pub struct DataCollector {
    data_sources: Vec<String>,
    update_interval: Duration,
    source: Box<dyn PriceSource>,
}

impl DataCollector {
    pub fn new(source: Box<dyn PriceSource>) -> Self {
        Self {
            data_sources: Vec::new(),
            update_interval: Duration::from_secs(DEFAULT_UPDATE_INTERVAL_SECS),
            source,
        }
    }

    /// Registers a source URL. Order is kept, duplicates are allowed.
    pub fn add_data_source(&mut self, source: impl Into<String>) {
        self.data_sources.push(source.into());
    }

    pub fn data_sources(&self) -> &[String] {
        &self.data_sources
    }

    pub fn set_update_interval(&mut self, interval: Duration) {
        self.update_interval = interval;
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    /// Fetches a fresh snapshot and stores it. Returns false on fetch
    /// failure; the caller decides whether to keep polling.
    pub async fn collect_prices(&self, market_data: &mut MarketData) -> bool {
        match self.source.fetch().await {
            Ok(snapshot) => {
                debug!(
                    markets = snapshot.markets().len(),
                    "snapshot collected"
                );
                market_data.update_prices(snapshot);
                true
            }
            Err(e) => {
                warn!("Error al recolectar datos: {e}");
                false
            }
        }
    }
}
