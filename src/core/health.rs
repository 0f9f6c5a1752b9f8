use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "OMEGA-FI Live Scanner";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
}

/// Liveness reporting for the HTTP layer. Answers without touching the scanner or
/// the quote provider.
#[derive(Debug, Clone)]
pub struct HealthChecker {
    service: String,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    pub fn get_status(&self) -> HealthStatus {
        HealthStatus {
            status: "alive".to_string(),
            service: self.service.clone(),
            timestamp: Utc::now(),
        }
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}
