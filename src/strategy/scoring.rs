use chrono::{DateTime, Utc};

use super::indicators::{momentum_indicator, round_to, volume_spike_pct};
use super::signals::ScoredResult;
use crate::api::Quote;

pub const BASE_SCORE: f64 = 5.0;
pub const MOMENTUM_BONUS: f64 = 1.5;
pub const VOLUME_SPIKE_BONUS: f64 = 1.5;
pub const PRICE_ACTION_BONUS: f64 = 1.0;

/// Exclusive bounds of the momentum zone.
pub const MOMENTUM_ZONE: (f64, f64) = (50.0, 75.0);
pub const VOLUME_SPIKE_THRESHOLD: f64 = 30.0;
pub const CHANGE_PCT_THRESHOLD: f64 = 0.5;

/// Minimum rounded score for a symbol to make it into a scan.
pub const QUALITY_THRESHOLD: f64 = 7.0;

/// Turns a quote into a [`ScoredResult`]. Stateless; missing optional fields fall back
/// to defaults instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, symbol: &str, quote: &Quote) -> ScoredResult {
        self.evaluate_at(symbol, quote, Utc::now())
    }

    pub fn evaluate_at(
        &self,
        symbol: &str,
        quote: &Quote,
        timestamp: DateTime<Utc>,
    ) -> ScoredResult {
        let rsi = momentum_indicator(symbol);
        let volume_spike = volume_spike_pct(quote.volume);
        let quality_score = quality_score(rsi as f64, volume_spike, quote.change_pct);

        ScoredResult {
            symbol: symbol.to_string(),
            ltp: round_to(quote.last_price, 2),
            high: present_price(quote.high),
            low: present_price(quote.low),
            volume: quote.volume.map(|v| v as u64).unwrap_or(0),
            volume_spike_pct: round_to(volume_spike, 1),
            rsi,
            change_pct: quote.change_pct.map(|c| round_to(c, 2)).unwrap_or(0.0),
            quality_score: round_to(quality_score, 1),
            timestamp,
        }
    }
}

/// Additive score, unrounded. Each rule applies independently.
pub fn quality_score(momentum: f64, volume_spike: f64, change_pct: Option<f64>) -> f64 {
    let mut score = BASE_SCORE;

    if momentum > MOMENTUM_ZONE.0 && momentum < MOMENTUM_ZONE.1 {
        score += MOMENTUM_BONUS;
    }
    if volume_spike > VOLUME_SPIKE_THRESHOLD {
        score += VOLUME_SPIKE_BONUS;
    }
    if change_pct.map_or(false, |c| c > CHANGE_PCT_THRESHOLD) {
        score += PRICE_ACTION_BONUS;
    }

    score
}

// A zero high/low means the provider had nothing for the session.
fn present_price(price: Option<f64>) -> Option<f64> {
    price.filter(|p| *p != 0.0).map(|p| round_to(p, 2))
}
