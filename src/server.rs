use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::{Filter, Rejection, Reply};

use crate::core::health::SERVICE_NAME;
use crate::core::HealthChecker;
use crate::scanner::{MarketScanner, ScanReport};
use crate::strategy::ScoredResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub status: String,
    /// Size of the full qualifying set, which can exceed `data.len()`
    pub count: usize,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<ScoredResult>,
}

impl From<ScanReport> for ScanResponse {
    fn from(report: ScanReport) -> Self {
        Self {
            status: "success".to_string(),
            count: report.qualifying_count,
            timestamp: report.completed_at,
            data: report.results,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

impl HomeResponse {
    pub fn new() -> Self {
        let endpoints = BTreeMap::from([
            ("/scan-live".to_string(), "Get live market scan".to_string()),
            ("/health".to_string(), "Health check".to_string()),
        ]);

        Self {
            message: format!("{} Active", SERVICE_NAME),
            endpoints,
        }
    }
}

impl Default for HomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// All routes: `GET /scan-live`, `GET /health` and `GET /`.
pub fn routes(
    scanner: Arc<MarketScanner>,
    health_checker: HealthChecker,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let scan_live = warp::path("scan-live")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::any().map(move || scanner.clone()))
        .and_then(handle_scan);

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(move || warp::reply::json(&health_checker.get_status()));

    let home = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::json(&HomeResponse::new()));

    scan_live.or(health).or(home)
}

async fn handle_scan(scanner: Arc<MarketScanner>) -> Result<impl Reply, Infallible> {
    let report = scanner.run().await;
    Ok(warp::reply::json(&ScanResponse::from(report)))
}

pub async fn serve(scanner: Arc<MarketScanner>, health_checker: HealthChecker, port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("✅ HTTP server listening on {}", addr);

    warp::serve(routes(scanner, health_checker)).run(addr).await;
}
