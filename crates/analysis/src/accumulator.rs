//! Per-price-level volume and value accumulation.
//!
//! Folds a trade batch into a map of exact price levels, each carrying
//! volume/value by classification, trade count and last trade time.

use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;

use profile_core::{OrderBookSnapshot, PriceKey, PriceLevel, TimestampSec, Trade};
use profile_ingestion::resolve;

/// Accumulate a trade batch into per-price levels.
///
/// Trades are folded oldest-first so `last_trade_time` ends up on the most
/// recent trade at each price; the input may arrive in any order. Derived
/// totals and imbalances are recomputed in full in a second pass, never
/// incrementally.
pub fn accumulate(
    trades: &[Trade],
    book: &OrderBookSnapshot,
    tz: FixedOffset,
) -> BTreeMap<PriceKey, PriceLevel> {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by_key(|t| t.time);

    let mut levels: BTreeMap<PriceKey, PriceLevel> = BTreeMap::new();
    for trade in ordered {
        let level = levels.entry(PriceKey::from_price(trade.price)).or_default();
        level.add(resolve(trade, book), trade.volume, trade.value());
        level.last_trade_time = Some(format_trade_time(trade.time, tz));
    }

    for level in levels.values_mut() {
        level.finalize();
    }

    levels
}

/// Format an epoch-seconds timestamp in the display timezone.
///
/// Timestamps outside chrono's representable range fall back to the raw
/// epoch value.
pub fn format_trade_time(time: TimestampSec, tz: FixedOffset) -> String {
    match DateTime::from_timestamp(time, 0) {
        Some(dt) => dt
            .with_timezone(&tz)
            .format("%Y-%m-%d %H:%M:%S%:z")
            .to_string(),
        None => time.to_string(),
    }
}
