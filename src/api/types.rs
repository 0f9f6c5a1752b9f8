use serde::Deserialize;

use super::error::QuoteError;

/// Finnhub `/quote` payload. Only the fields the scanner reads are mapped; the
/// provider sends more (`d`, `o`, `pc`, `t`).
#[derive(Debug, Clone, Deserialize)]
pub struct FinnhubQuote {
    /// Current price
    pub c: Option<f64>,
    /// High price of the day
    pub h: Option<f64>,
    /// Low price of the day
    pub l: Option<f64>,
    /// Volume
    pub v: Option<f64>,
    /// Percent change
    pub dp: Option<f64>,
}

/// A validated quote snapshot. Only exists when the provider reported a last price.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub last_price: f64,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<f64>,
    pub change_pct: Option<f64>,
}

#[cfg(test)]
impl Quote {
    pub fn new(last_price: f64) -> Self {
        Self {
            last_price,
            high: None,
            low: None,
            volume: None,
            change_pct: None,
        }
    }
}

impl FinnhubQuote {
    pub fn into_quote(self, symbol: &str) -> Result<Quote, QuoteError> {
        let last_price = self
            .c
            .ok_or_else(|| QuoteError::malformed(symbol, "missing current price (c)"))?;

        Ok(Quote {
            last_price,
            high: self.h,
            low: self.l,
            // Negative volume is treated as absent.
            volume: self.v.filter(|v| *v >= 0.0),
            change_pct: self.dp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_full_payload_converts() {
        let raw: FinnhubQuote = serde_json::from_value(serde_json::json!({
            "c": 100.0, "h": 105.0, "l": 95.0, "v": 3_000_000, "dp": 1.2,
            "d": 1.19, "o": 99.0, "pc": 98.8, "t": 1_700_000_000
        }))
        .unwrap();

        let quote = assert_ok!(raw.into_quote("TEST"));
        assert_eq!(quote.last_price, 100.0);
        assert_eq!(quote.high, Some(105.0));
        assert_eq!(quote.low, Some(95.0));
        assert_eq!(quote.volume, Some(3_000_000.0));
        assert_eq!(quote.change_pct, Some(1.2));
    }

    #[test]
    fn test_missing_price_is_malformed() {
        let raw: FinnhubQuote = serde_json::from_str("{}").unwrap();
        let err = assert_err!(raw.into_quote("TEST"));
        assert!(matches!(err, QuoteError::Malformed { .. }));
        assert_eq!(err.symbol(), "TEST");
    }

    #[test]
    fn test_null_price_is_malformed() {
        let raw: FinnhubQuote = serde_json::from_str(r#"{"c": null, "h": 10.0}"#).unwrap();
        assert_err!(raw.into_quote("TEST"));
    }

    #[test]
    fn test_optional_fields_stay_absent() {
        let raw: FinnhubQuote = serde_json::from_str(r#"{"c": 50.0}"#).unwrap();
        let quote = raw.into_quote("TEST").unwrap();
        assert_eq!(quote, Quote::new(50.0));
    }
}
