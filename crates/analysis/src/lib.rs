//! Volume-profile analysis for the volume-profile system.
//!
//! This crate handles:
//! - Per-price-level volume/value accumulation
//! - Significant-level ranking by total notional value
//! - Session-wide summarization (totals, buy ratios, VWAP, market status)
//! - The `Analyzer` entry point combining the above

pub mod accumulator;
pub mod engine;
pub mod ranking;
pub mod summary;

pub use accumulator::accumulate;
pub use engine::Analyzer;
pub use ranking::significant_levels;
pub use summary::{market_status, trading_summary};
