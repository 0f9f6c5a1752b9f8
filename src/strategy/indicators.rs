/// Fixed "assumed 5-day average volume" the spike ratio is measured against.
pub const BASELINE_VOLUME: f64 = 2_000_000.0;

const MOMENTUM_FLOOR: u32 = 65;
const MOMENTUM_SPREAD: u64 = 10;
const HASH_BASE: u64 = 31;

/// Polynomial string hash over the UTF-8 bytes. Stable across runs and platforms,
/// unlike `std::collections::hash_map::DefaultHasher` which is randomly seeded.
pub fn stable_hash(symbol: &str) -> u64 {
    symbol
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(HASH_BASE).wrapping_add(b as u64))
}

/// Placeholder momentum reading in `[65, 74]`, derived only from the symbol name.
/// Not a real RSI.
pub fn momentum_indicator(symbol: &str) -> u32 {
    MOMENTUM_FLOOR + (stable_hash(symbol) % MOMENTUM_SPREAD) as u32
}

/// Observed volume as a percentage of [`BASELINE_VOLUME`]. Zero when volume is
/// missing or zero.
pub fn volume_spike_pct(volume: Option<f64>) -> f64 {
    match volume {
        Some(v) if v != 0.0 => (v / BASELINE_VOLUME) * 100.0,
        _ => 0.0,
    }
}

/// Rounds from the exact binary value, half-to-even on exact ties (`100.125` -> `100.12`).
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
