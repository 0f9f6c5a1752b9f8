use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::strategy::QUALITY_THRESHOLD;

pub const DEFAULT_FINNHUB_URL: &str = "https://finnhub.io/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub finnhub: FinnhubConfig,
    pub scanner: ScannerConfig,
    pub server: ServerConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FinnhubConfig {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    pub pacing_ms: u64,
    pub min_quality_score: f64,
    pub top_n: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: String,
}

impl FinnhubConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl ScannerConfig {
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            pacing_ms: 50,
            min_quality_score: QUALITY_THRESHOLD,
            top_n: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let scanner_defaults = ScannerConfig::default();

        Ok(Config {
            finnhub: FinnhubConfig {
                api_key: env::var("FINNHUB_API_KEY").unwrap_or_default(),
                base_url: env::var("FINNHUB_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_FINNHUB_URL.to_string()),
                // A zero timeout would fail every request, so it counts as unset.
                request_timeout_secs: match env_or("REQUEST_TIMEOUT_SECS", 0) {
                    0 => DEFAULT_REQUEST_TIMEOUT_SECS,
                    secs => secs,
                },
            },
            scanner: ScannerConfig {
                pacing_ms: env_or("SCAN_PACING_MS", scanner_defaults.pacing_ms),
                min_quality_score: env_or(
                    "MIN_QUALITY_SCORE",
                    scanner_defaults.min_quality_score,
                ),
                top_n: env_or("SCAN_TOP_N", scanner_defaults.top_n),
            },
            server: ServerConfig {
                port: env_or("PORT", DEFAULT_PORT),
            },
            monitoring: MonitoringConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }
}

/// Reads and parses an environment variable, falling back to `default` when it is
/// unset or does not parse.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_defaults() {
        let scanner = ScannerConfig::default();
        assert_eq!(scanner.pacing(), Duration::from_millis(50));
        assert_eq!(scanner.min_quality_score, 7.0);
        assert_eq!(scanner.top_n, 5);
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("OMEGA_TEST_PORT_GARBAGE", "not-a-port");
        assert_eq!(env_or::<u16>("OMEGA_TEST_PORT_GARBAGE", 5000), 5000);

        env::set_var("OMEGA_TEST_PORT_VALID", " 8080 ");
        assert_eq!(env_or::<u16>("OMEGA_TEST_PORT_VALID", 5000), 8080);

        assert_eq!(env_or::<u64>("OMEGA_TEST_UNSET_VARIABLE", 5), 5);
    }

    // Only this test touches the variables `from_env` reads.
    #[test]
    fn test_from_env_defaults_and_zero_timeout() {
        for key in [
            "FINNHUB_API_KEY",
            "FINNHUB_BASE_URL",
            "REQUEST_TIMEOUT_SECS",
            "SCAN_PACING_MS",
            "MIN_QUALITY_SCORE",
            "SCAN_TOP_N",
            "PORT",
            "LOG_LEVEL",
        ] {
            env::remove_var(key);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.finnhub.api_key, "");
        assert_eq!(config.finnhub.base_url, DEFAULT_FINNHUB_URL);
        assert_eq!(config.finnhub.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.scanner.pacing_ms, 50);
        assert_eq!(config.scanner.min_quality_score, 7.0);
        assert_eq!(config.scanner.top_n, 5);
        assert_eq!(config.monitoring.log_level, "info");

        env::set_var("REQUEST_TIMEOUT_SECS", "0");
        let config = Config::from_env().unwrap();
        assert_eq!(config.finnhub.request_timeout_secs, 5);

        env::set_var("REQUEST_TIMEOUT_SECS", "12");
        let config = Config::from_env().unwrap();
        assert_eq!(config.finnhub.request_timeout_secs, 12);

        env::remove_var("REQUEST_TIMEOUT_SECS");
    }
}
