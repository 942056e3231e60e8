use crate::model::{HistoryEntry, PriceSnapshot};
use chrono::Utc;

/// In-memory store of the current snapshot plus an append-only history
/// of every update made during the process lifetime.
#[derive(Debug, Default)]
pub struct MarketData {
    prices: PriceSnapshot,
    history: Vec<HistoryEntry>,
}

impl MarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current snapshot and records it in history.
    /// History entries own their snapshot, so later updates never
    /// alter what an earlier entry recorded.
    pub fn update_prices(&mut self, new_prices: PriceSnapshot) {
        self.history.push(HistoryEntry {
            recorded_at: Utc::now(),
            snapshot: new_prices.clone(),
        });
        self.prices = new_prices;
    }

    /// Read-only view of the live snapshot.
    pub fn get_current_prices(&self) -> &PriceSnapshot {
        &self.prices
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
