use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::QuoteSource;
use crate::core::config::ScannerConfig;
use crate::strategy::{ScoreEngine, ScoredResult};

/// Counters for one pass over the universe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanStats {
    pub scanned: usize,
    pub fetched: usize,
    pub skipped: usize,
    pub qualified: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Every qualifying symbol, before truncation
    pub qualifying_count: usize,
    /// Top results, best first
    pub results: Vec<ScoredResult>,
    pub stats: ScanStats,
    pub completed_at: DateTime<Utc>,
}

/// Walks the fixed universe one symbol at a time: fetch, score, keep the ones that
/// clear the threshold. Holds no mutable state, so one instance serves concurrent
/// scans.
pub struct MarketScanner {
    source: Arc<dyn QuoteSource>,
    engine: ScoreEngine,
    universe: Vec<String>,
    config: ScannerConfig,
}

impl MarketScanner {
    pub fn new(
        source: Arc<dyn QuoteSource>,
        universe: Vec<String>,
        config: ScannerConfig,
    ) -> Self {
        Self {
            source,
            engine: ScoreEngine::new(),
            universe,
            config,
        }
    }

    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    pub async fn run(&self) -> ScanReport {
        let started = Instant::now();
        let mut stats = ScanStats::default();
        let mut results = Vec::new();

        tracing::info!("🔍 Scan initiated - analyzing {} stocks", self.universe.len());

        for (i, symbol) in self.universe.iter().enumerate() {
            if i > 0 && !self.config.pacing().is_zero() {
                tokio::time::sleep(self.config.pacing()).await;
            }
            stats.scanned += 1;

            let quote = match self.source.fetch(symbol).await {
                Ok(quote) => quote,
                Err(e) => {
                    tracing::warn!("Error scanning {}: {}", symbol, e);
                    stats.skipped += 1;
                    continue;
                }
            };
            stats.fetched += 1;

            let result = self.engine.evaluate(symbol, &quote);
            tracing::debug!(
                "{} @ {:.2} - rsi {} spike {:.1}% score {:.1}",
                symbol,
                result.ltp,
                result.rsi,
                result.volume_spike_pct,
                result.quality_score
            );

            if result.qualifies(self.config.min_quality_score) {
                results.push(result);
            }
        }

        // sort_by is stable: equal scores keep scan order
        results.sort_by(|a, b| b.quality_score.total_cmp(&a.quality_score));

        let qualifying_count = results.len();
        results.truncate(self.config.top_n);

        stats.qualified = qualifying_count;
        stats.elapsed = started.elapsed();

        tracing::info!(
            "📊 Scan complete: {} scanned, {} fetched, {} skipped, {} qualified ({} ms)",
            stats.scanned,
            stats.fetched,
            stats.skipped,
            stats.qualified,
            stats.elapsed.as_millis()
        );

        ScanReport {
            qualifying_count,
            results,
            stats,
            completed_at: Utc::now(),
        }
    }
}
