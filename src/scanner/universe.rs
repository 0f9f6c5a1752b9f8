/// Nifty 50 constituents scanned on every request, in scan order.
pub const NIFTY_50_STOCKS: [&str; 25] = [
    "HDFC",
    "INFY",
    "TCS",
    "RELIANCE",
    "ICICIBANK",
    "SBIN",
    "HDFCBANK",
    "MARUTI",
    "WIPRO",
    "ITC",
    "AXISBANK",
    "SUNPHARMA",
    "LT",
    "HCLTECH",
    "TATAMOTORS",
    "ASIANPAINT",
    "NTPC",
    "POWERGRID",
    "JSWSTEEL",
    "BAJAJFINSV",
    "BHARTIARTL",
    "ULTRACEMCO",
    "HINDALCO",
    "DRREDDY",
    "ONGC",
];

pub fn default_universe() -> Vec<String> {
    NIFTY_50_STOCKS.iter().map(|s| s.to_string()).collect()
}
