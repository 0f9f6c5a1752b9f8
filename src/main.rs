use anyhow::Result;
use omega_fi_scanner::api::FinnhubClient;
use omega_fi_scanner::core::{logging, Config, HealthChecker};
use omega_fi_scanner::scanner::{default_universe, MarketScanner};
use omega_fi_scanner::server;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    logging::init_logging(&config.monitoring.log_level);

    tracing::info!("🚀 OMEGA-FI Live Scanner starting...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if config.finnhub.api_key.is_empty() {
        tracing::warn!("⚠️  FINNHUB_API_KEY is not set - every quote request will be rejected");
    }

    let client = Arc::new(FinnhubClient::new(&config.finnhub)?);
    let scanner = Arc::new(MarketScanner::new(
        client,
        default_universe(),
        config.scanner.clone(),
    ));

    tracing::info!(
        "Universe: {} symbols, pacing {} ms, threshold {:.1}, top {}",
        scanner.universe().len(),
        config.scanner.pacing_ms,
        config.scanner.min_quality_score,
        config.scanner.top_n
    );

    server::serve(scanner, HealthChecker::new(), config.server.port).await;

    Ok(())
}
