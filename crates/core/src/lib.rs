//! Core types and configuration for the volume-profile system.
//!
//! This crate provides shared types used across all other crates:
//! - Market data types (trades, order book snapshots, price levels)
//! - Analysis output types (summaries, market status)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{parse_timezone, AnalysisConfig};
pub use error::{Error, Result};
pub use types::*;
