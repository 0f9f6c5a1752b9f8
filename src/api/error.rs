//! Per-symbol quote failures.

use thiserror::Error;

/// Why a single symbol produced no quote. The scanner skips the symbol either way.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Transport failure, timeout or non-success HTTP status
    #[error("quote provider unavailable for {symbol}: {reason}")]
    Unavailable { symbol: String, reason: String },

    /// The provider answered but the payload carries no usable price
    #[error("malformed quote for {symbol}: {reason}")]
    Malformed { symbol: String, reason: String },
}

impl QuoteError {
    pub fn unavailable(symbol: &str, reason: impl Into<String>) -> Self {
        QuoteError::Unavailable {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }

    pub fn malformed(symbol: &str, reason: impl Into<String>) -> Self {
        QuoteError::Malformed {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }

    #[cfg(test)]
    pub fn symbol(&self) -> &str {
        match self {
            QuoteError::Unavailable { symbol, .. } | QuoteError::Malformed { symbol, .. } => {
                symbol
            }
        }
    }
}
