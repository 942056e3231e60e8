// Console rendering. Kept as plain string builders so the output
// format stays testable.
use crate::model::{Deal, ProductTrend, Trend};
use std::fmt::Write;

pub const BANNER: &str = "Analizador de Precios de Carne en Nuevo León\n\
                          =========================================";

pub const UPDATING: &str = "\nActualizando precios...";
pub const COLLECT_FAILED: &str = "Error al recolectar datos de precios";
pub const FAREWELL: &str = "\nPrograma terminado por el usuario";

pub fn render_deals(deals: &[Deal]) -> String {
    let mut out = String::from("\nMejores ofertas encontradas:\n-------------------------\n");
    for deal in deals {
        let _ = write!(
            out,
            "Mercado: {}\nTipo de carne: {}\nPrecio por kg: ${:.2}\n-------------------------\n",
            deal.market, deal.product, deal.price_per_kg
        );
    }
    out
}

pub fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "↑ Subiendo",
        Trend::Falling => "↓ Bajando",
        Trend::Stable => "→ Estable",
    }
}

pub fn render_trends(trends: &[ProductTrend]) -> String {
    let mut out = String::from("\nTendencias de precios:\n");
    for trend in trends {
        let _ = writeln!(out, "{}: {}", trend.product, trend_arrow(trend.direction()));
    }
    out
}
