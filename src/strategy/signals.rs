use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored symbol as it appears in the `/scan-live` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub symbol: String,
    pub ltp: f64,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: u64,
    pub volume_spike_pct: f64,
    pub rsi: u32,
    pub change_pct: f64,
    pub quality_score: f64,
    pub timestamp: DateTime<Utc>,
}

impl ScoredResult {
    pub fn qualifies(&self, min_quality_score: f64) -> bool {
        self.quality_score >= min_quality_score
    }
}
