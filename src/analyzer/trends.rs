use crate::model::{PriceSnapshot, ProductTrend};

/// Average price of a product across every market quoting it.
pub fn average_product_price(snapshot: &PriceSnapshot, product: &str) -> Option<f64> {
    let prices: Vec<f64> = snapshot
        .iter_prices()
        .filter(|(_, p, _)| *p == product)
        .map(|(_, _, price)| price)
        .collect();
    if prices.is_empty() {
        return None;
    }
    Some(prices.iter().sum::<f64>() / prices.len() as f64)
}

/// Per-product movement between two snapshots: latest market average
/// minus the previous one, rounded to centavos. Products without a
/// previous quote read as stable.
pub fn trend_between(prev: &PriceSnapshot, latest: &PriceSnapshot) -> Vec<ProductTrend> {
    latest
        .product_names()
        .into_iter()
        .map(|product| {
            let now = average_product_price(latest, product);
            let before = average_product_price(prev, product);
            let value = match (before, now) {
                (Some(b), Some(n)) => ((n - b) * 100.0).round() / 100.0,
                _ => 0.0,
            };
            ProductTrend {
                product: product.to_string(),
                value,
            }
        })
        .collect()
}
