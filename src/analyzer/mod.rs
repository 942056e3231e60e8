// Analyzer module: deal ranking and price trend analysis.

pub mod deals;
pub mod trends;

// Re-export the main analyzer implementation for ease of use.
pub use deals::PriceAnalyzer;
