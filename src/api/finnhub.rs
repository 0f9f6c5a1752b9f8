use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::QuoteError;
use super::types::*;
use crate::core::config::FinnhubConfig;

/// Anything that can produce a quote for a symbol. One attempt per call, no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<Quote, QuoteError>;
}

pub struct FinnhubClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FinnhubClient {
    pub fn new(config: &FinnhubConfig) -> Result<Self> {
        Self::with_timeout(
            &config.base_url,
            &config.api_key,
            config.request_timeout(),
        )
    }

    pub fn with_timeout(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build Finnhub HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn quote_url(&self) -> String {
        format!("{}/quote", self.base_url)
    }
}

/// Strips the URL from transport errors so the access token never reaches the logs.
fn describe(err: reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else {
        err.without_url().to_string()
    }
}

#[async_trait]
impl QuoteSource for FinnhubClient {
    async fn fetch(&self, symbol: &str) -> Result<Quote, QuoteError> {
        let response = self
            .client
            .get(self.quote_url())
            .query(&[("symbol", symbol), ("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| QuoteError::unavailable(symbol, describe(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::unavailable(
                symbol,
                format!("HTTP status {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::unavailable(symbol, describe(e)))?;

        let payload: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| QuoteError::malformed(symbol, format!("invalid JSON: {}", e)))?;

        if !payload.is_object() {
            return Err(QuoteError::malformed(symbol, "expected a JSON object"));
        }

        let raw: FinnhubQuote = serde_json::from_value(payload)
            .map_err(|e| QuoteError::malformed(symbol, e.to_string()))?;

        raw.into_quote(symbol)
    }
}
