pub mod market_scanner;
pub mod universe;

pub use market_scanner::{MarketScanner, ScanReport, ScanStats};
pub use universe::{default_universe, NIFTY_50_STOCKS};
