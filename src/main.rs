mod analyzer;
mod collector;
mod config;
mod market;
mod model;
mod report;
mod source;

use analyzer::deals::Analyzer;
use analyzer::PriceAnalyzer;
use collector::DataCollector;
use config::AppConfig;
use market::MarketData;
use source::SampleSource;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::sleep;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {panic_info:?}");
    }));

    let config = match AppConfig::load_or_default("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Ctrl-C flips the shutdown notifier; the loop only observes it
    // between iterations or during the sleep.
    let shutdown = Arc::new(Notify::new());
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.notify_one();
            }
        });
    }

    run(config, shutdown).await;
    ExitCode::SUCCESS
}

/// Main poll loop: collect, rank, report, sleep, repeat until shutdown.
async fn run(config: AppConfig, shutdown: Arc<Notify>) {
    let mut collector = DataCollector::new(Box::new(SampleSource::new()));
    for src in &config.sources {
        collector.add_data_source(src.url.clone());
    }
    collector.set_update_interval(Duration::from_secs(config.update_interval_seconds));

    let analyzer = PriceAnalyzer::new();
    let mut market_data = MarketData::new();

    println!("{}", report::BANNER);
    info!("Sources configured: {}", collector.data_sources().len());

    loop {
        println!("{}", report::UPDATING);

        if collector.collect_prices(&mut market_data).await {
            let deals = analyzer.find_best_deals(&market_data);
            print!("{}", report::render_deals(&deals));

            let trends = analyzer.analyze_price_trends(&market_data);
            print!("{}", report::render_trends(&trends));
        } else {
            println!("{}", report::COLLECT_FAILED);
        }

        info!(
            "Waiting {}s until next update...",
            config.update_interval_seconds
        );
        tokio::select! {
            _ = sleep(collector.update_interval()) => {}
            _ = shutdown.notified() => {
                println!("{}", report::FAREWELL);
                return;
            }
        }
    }
}
