pub mod indicators;
pub mod scoring;
pub mod signals;

pub use scoring::{ScoreEngine, QUALITY_THRESHOLD};
pub use signals::ScoredResult;
