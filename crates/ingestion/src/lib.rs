//! Data ingestion and classification for the volume-profile system.
//!
//! This crate handles:
//! - Side-tag mapping for raw trade prints
//! - Ambiguous-trade resolution against the order book (bid/ask boundary)
//! - Collaborator contracts for trade and order-book sources

pub mod classifier;
pub mod sources;

pub use classifier::resolve;
pub use sources::{InMemorySource, OrderBookSource, TradeSource};
