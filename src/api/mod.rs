pub mod error;
pub mod finnhub;
pub mod types;

pub use error::QuoteError;
pub use finnhub::{FinnhubClient, QuoteSource};
pub use types::*;

#[cfg(test)]
pub use finnhub::MockQuoteSource;
