use crate::analyzer::trends;
use crate::market::MarketData;
use crate::model::{Deal, ProductTrend};

/// Trait defining the interface for a price analyzer.
pub trait Analyzer {
    /// Flat ranking of every (market, product, price) observation,
    /// cheapest first.
    fn find_best_deals(&self, market_data: &MarketData) -> Vec<Deal>;
    /// Per-product price movement derived from history.
    fn analyze_price_trends(&self, market_data: &MarketData) -> Vec<ProductTrend>;
}

pub struct PriceAnalyzer;

impl PriceAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PriceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for PriceAnalyzer {
    /// Flattens the current snapshot in insertion order, then sorts
    /// ascending by price. The sort is stable, so equal prices keep
    /// market-then-product order.
    fn find_best_deals(&self, market_data: &MarketData) -> Vec<Deal> {
        let mut deals: Vec<Deal> = market_data
            .get_current_prices()
            .iter_prices()
            .map(|(market, product, price_per_kg)| Deal {
                market: market.to_string(),
                product: product.to_string(),
                price_per_kg,
            })
            .collect();
        deals.sort_by(|a, b| a.price_per_kg.total_cmp(&b.price_per_kg));
        deals
    }

    /// Compares the two most recent history snapshots per product.
    /// With fewer than two entries there is nothing to compare and
    /// every product reads as stable.
    fn analyze_price_trends(&self, market_data: &MarketData) -> Vec<ProductTrend> {
        let history = market_data.history();
        match history {
            [.., prev, latest] => trends::trend_between(&prev.snapshot, &latest.snapshot),
            _ => market_data
                .get_current_prices()
                .product_names()
                .into_iter()
                .map(|product| ProductTrend {
                    product: product.to_string(),
                    value: 0.0,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::sample::sample_snapshot;

    fn sample_market_data() -> MarketData {
        let mut data = MarketData::new();
        data.update_prices(sample_snapshot());
        data
    }

    #[test]
    fn deals_cover_every_market_product_pair() {
        let data = sample_market_data();
        let deals = PriceAnalyzer::new().find_best_deals(&data);
        assert_eq!(deals.len(), 9);
    }

    #[test]
    fn deals_are_sorted_ascending_by_price() {
        let data = sample_market_data();
        let deals = PriceAnalyzer::new().find_best_deals(&data);
        assert!(deals.windows(2).all(|w| w[0].price_per_kg <= w[1].price_per_kg));
    }

    #[test]
    fn sample_snapshot_ranks_in_expected_order() {
        let data = sample_market_data();
        let deals = PriceAnalyzer::new().find_best_deals(&data);

        let expected = [
            ("Soriana", "Pollo", 85.50),
            ("Walmart", "Pollo", 88.70),
            ("HEB", "Pollo", 89.90),
            ("Soriana", "Cerdo", 118.50),
            ("HEB", "Cerdo", 120.30),
            ("Walmart", "Cerdo", 122.40),
            ("Soriana", "Res", 175.90),
            ("Walmart", "Res", 178.30),
            ("HEB", "Res", 180.50),
        ];
        let got: Vec<(&str, &str, f64)> = deals
            .iter()
            .map(|d| (d.market.as_str(), d.product.as_str(), d.price_per_kg))
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn equal_prices_keep_insertion_order() {
        let mut snapshot = crate::model::PriceSnapshot::new();
        snapshot.insert("HEB", "Res", 100.0);
        snapshot.insert("Soriana", "Res", 100.0);
        let mut data = MarketData::new();
        data.update_prices(snapshot);

        let deals = PriceAnalyzer::new().find_best_deals(&data);
        assert_eq!(deals[0].market, "HEB");
        assert_eq!(deals[1].market, "Soriana");
    }

    #[test]
    fn deals_are_idempotent_without_updates() {
        let data = sample_market_data();
        let analyzer = PriceAnalyzer::new();
        assert_eq!(analyzer.find_best_deals(&data), analyzer.find_best_deals(&data));
    }

    #[test]
    fn empty_market_data_yields_no_deals() {
        let deals = PriceAnalyzer::new().find_best_deals(&MarketData::new());
        assert!(deals.is_empty());
    }

    #[test]
    fn single_history_entry_reads_all_stable() {
        let data = sample_market_data();
        let trends = PriceAnalyzer::new().analyze_price_trends(&data);

        assert_eq!(trends.len(), 3);
        assert!(trends.iter().all(|t| t.value == 0.0));
        let products: Vec<&str> = trends.iter().map(|t| t.product.as_str()).collect();
        assert_eq!(products, vec!["Res", "Cerdo", "Pollo"]);
    }

    #[test]
    fn trends_compare_last_two_snapshots() {
        let mut data = MarketData::new();

        let mut first = crate::model::PriceSnapshot::new();
        first.insert("HEB", "Res", 180.0);
        first.insert("HEB", "Cerdo", 120.0);
        first.insert("HEB", "Pollo", 90.0);
        data.update_prices(first);

        let mut second = crate::model::PriceSnapshot::new();
        second.insert("HEB", "Res", 184.0);
        second.insert("HEB", "Cerdo", 117.0);
        second.insert("HEB", "Pollo", 90.0);
        data.update_prices(second);

        let trends = PriceAnalyzer::new().analyze_price_trends(&data);
        use crate::model::Trend;
        assert_eq!(trends[0].direction(), Trend::Rising);
        assert_eq!(trends[1].direction(), Trend::Falling);
        assert_eq!(trends[2].direction(), Trend::Stable);
    }
}
