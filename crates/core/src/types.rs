//! Core data types for the volume-profile system.

use serde::{Deserialize, Serialize};

/// Timestamp in seconds since Unix epoch.
pub type TimestampSec = i64;

/// Minor units per one unit of price (price map keys are price x 100).
pub const PRICE_SCALE: f64 = 100.0;

/// Exact-equality price key: price in minor units.
///
/// Using an integer key avoids relying on bit-identical floats for map
/// lookups; two prints at the same quoted price always land in the same
/// level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PriceKey(i64);

impl PriceKey {
    /// Build a key from a quoted price.
    #[inline]
    pub fn from_price(price: f64) -> Self {
        PriceKey((price * PRICE_SCALE).round() as i64)
    }

    /// Recover the quoted price.
    #[inline]
    pub fn price(self) -> f64 {
        self.0 as f64 / PRICE_SCALE
    }
}

/// Side tag carried by a raw trade print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    /// Explicitly tagged buyer-initiated.
    Buy,
    /// Explicitly tagged seller-initiated.
    Sell,
    /// Untagged or unrecognized; direction must be inferred from the book.
    Ambiguous,
}

impl TradeSide {
    /// Map a raw feed tag to a side.
    ///
    /// The feed tags explicit prints `"bu"` / `"sd"`; every other value
    /// (after-hour prints, missing tags, unknown strings) is ambiguous.
    /// Unrecognized tags are never an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bu" => TradeSide::Buy,
            "sd" => TradeSide::Sell,
            _ => TradeSide::Ambiguous,
        }
    }
}

/// Final classification of a trade after book resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeClass {
    /// Explicitly tagged buy.
    Buy,
    /// Explicitly tagged sell.
    Sell,
    /// Ambiguous print at or above the ask.
    AfterHourBuy,
    /// Ambiguous print at or below the bid.
    AfterHourSell,
    /// Ambiguous print inside the spread.
    AfterHourUnknown,
}

/// A single executed trade (print) from the feed.
///
/// Immutable once created; `trade_id` is globally unique and used by the
/// persistence collaborator for deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Globally unique identifier.
    pub trade_id: String,
    /// Instrument symbol.
    pub symbol: String,
    /// Executed price.
    pub price: f64,
    /// Executed volume (shares/contracts).
    pub volume: u64,
    /// Side tag.
    pub side: TradeSide,
    /// Execution time (epoch seconds).
    pub time: TimestampSec,
}

impl Trade {
    /// Notional value of the trade. Always derived, never stored.
    #[inline]
    pub fn value(&self) -> f64 {
        self.price * self.volume as f64
    }
}

/// One side of the top of book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookLevel {
    /// Quoted price.
    pub price: f64,
    /// Resting volume.
    pub volume: u64,
}

/// Point-in-time top-of-book snapshot for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Instrument symbol.
    pub symbol: String,
    /// Capture time (ISO-8601 string from the source).
    pub timestamp: String,
    /// Last match price.
    pub match_price: f64,
    /// Best bid.
    pub bid: BookLevel,
    /// Best ask.
    pub ask: BookLevel,
    /// Percent change on the session.
    pub change_percent: f64,
    /// Last traded volume.
    pub volume: u64,
}

impl OrderBookSnapshot {
    /// Quoted spread (ask - bid). May be negative if the book is crossed.
    #[inline]
    pub fn spread(&self) -> f64 {
        self.ask.price - self.bid.price
    }
}

/// Accumulated volume and value at one price level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Explicit buy volume.
    pub buy_volume: u64,
    /// Explicit sell volume.
    pub sell_volume: u64,
    /// After-hour volume resolved as buy.
    pub after_hour_buy: u64,
    /// After-hour volume resolved as sell.
    pub after_hour_sell: u64,
    /// After-hour volume inside the spread.
    pub after_hour_unknown: u64,
    /// Explicit buy value.
    pub buy_value: f64,
    /// Explicit sell value.
    pub sell_value: f64,
    /// After-hour buy value.
    pub after_hour_buy_value: f64,
    /// After-hour sell value.
    pub after_hour_sell_value: f64,
    /// After-hour unknown value.
    pub after_hour_unknown_value: f64,
    /// Sum of the five category volumes.
    pub total_volume: u64,
    /// Sum of the five category values.
    pub total_value: f64,
    /// (buy + after-hour buy) - (sell + after-hour sell), volume.
    pub volume_imbalance: i64,
    /// (buy + after-hour buy) - (sell + after-hour sell), value.
    pub value_imbalance: f64,
    /// Number of trades folded into this level.
    pub total_trades: u64,
    /// Formatted time of the most recent trade at this level.
    pub last_trade_time: Option<String>,
}

impl PriceLevel {
    /// Fold one classified trade into the matching category bucket.
    pub fn add(&mut self, class: TradeClass, volume: u64, value: f64) {
        match class {
            TradeClass::Buy => {
                self.buy_volume += volume;
                self.buy_value += value;
            }
            TradeClass::Sell => {
                self.sell_volume += volume;
                self.sell_value += value;
            }
            TradeClass::AfterHourBuy => {
                self.after_hour_buy += volume;
                self.after_hour_buy_value += value;
            }
            TradeClass::AfterHourSell => {
                self.after_hour_sell += volume;
                self.after_hour_sell_value += value;
            }
            TradeClass::AfterHourUnknown => {
                self.after_hour_unknown += volume;
                self.after_hour_unknown_value += value;
            }
        }
        self.total_trades += 1;
    }

    /// Recompute the derived totals and imbalances in full.
    ///
    /// `total_volume`/`total_value` partition exactly over the five
    /// categories; imbalances exclude the unknown bucket.
    pub fn finalize(&mut self) {
        self.total_volume = self.buy_volume
            + self.sell_volume
            + self.after_hour_buy
            + self.after_hour_sell
            + self.after_hour_unknown;
        self.total_value = self.buy_value
            + self.sell_value
            + self.after_hour_buy_value
            + self.after_hour_sell_value
            + self.after_hour_unknown_value;
        self.volume_imbalance = (self.buy_volume + self.after_hour_buy) as i64
            - (self.sell_volume + self.after_hour_sell) as i64;
        self.value_imbalance = (self.buy_value + self.after_hour_buy_value)
            - (self.sell_value + self.after_hour_sell_value);
    }
}

/// A top-ranked price level with its price attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificantLevel {
    /// The level's price.
    pub price: f64,
    /// Accumulated data at the level.
    #[serde(flatten)]
    pub level: PriceLevel,
}

/// Current market status derived from the book snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatus {
    /// Last match price.
    pub current_price: f64,
    /// Best bid price.
    pub bid_price: f64,
    /// Best bid volume.
    pub bid_volume: u64,
    /// Best ask price.
    pub ask_price: f64,
    /// Best ask volume.
    pub ask_volume: u64,
    /// ask - bid, not clamped.
    pub spread: f64,
}

/// After-hour volume breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AfterHourVolume {
    pub buy: u64,
    pub sell: u64,
    pub unknown: u64,
    pub total: u64,
}

/// After-hour value breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AfterHourValue {
    pub buy: f64,
    pub sell: f64,
    pub unknown: f64,
    pub total: f64,
}

/// Session-wide volume totals and buy ratio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeTotals {
    pub buy: u64,
    pub sell: u64,
    pub after_hour: AfterHourVolume,
    pub total: u64,
    /// (buy + after-hour buy) / directional total; 0 when nothing directional.
    pub buy_ratio: f64,
}

/// Session-wide value totals and buy ratio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueTotals {
    pub buy: f64,
    pub sell: f64,
    pub after_hour: AfterHourValue,
    pub total: f64,
    pub buy_ratio: f64,
}

/// Whole-session trading summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradingSummary {
    /// Human-readable description of the analysed window.
    pub period: String,
    /// Number of trades in the batch.
    pub total_trades: usize,
    /// Volume totals by classification.
    pub volume: VolumeTotals,
    /// Value totals by classification.
    pub value: ValueTotals,
    /// Distinct price levels observed.
    pub unique_price_levels: usize,
    /// total_value / total_volume; 0 when no volume.
    pub average_price: f64,
}

/// Complete output of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Capture time of the book snapshot used for classification.
    pub timestamp: String,
    /// Instrument symbol.
    pub symbol: String,
    /// Top-of-book status.
    pub market_status: MarketStatus,
    /// Top-N levels by total value.
    pub significant_levels: Vec<SignificantLevel>,
    /// Accumulated data at the current best bid price.
    pub bid_level: PriceLevel,
    /// Accumulated data at the current best ask price.
    pub ask_level: PriceLevel,
    /// Session-wide totals and ratios.
    pub trading_summary: TradingSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_key_exact_match() {
        // Same quoted price must share a key even when the floats were
        // produced by different arithmetic.
        let a = PriceKey::from_price(25.35);
        let b = PriceKey::from_price(25.349999999999998);
        assert_eq!(a, b);
        assert!((a.price() - 25.35).abs() < 1e-12);
    }

    #[test]
    fn test_side_from_tag() {
        assert_eq!(TradeSide::from_tag("bu"), TradeSide::Buy);
        assert_eq!(TradeSide::from_tag("sd"), TradeSide::Sell);
        assert_eq!(TradeSide::from_tag("after-hour"), TradeSide::Ambiguous);
        assert_eq!(TradeSide::from_tag(""), TradeSide::Ambiguous);
        assert_eq!(TradeSide::from_tag("BUY"), TradeSide::Ambiguous);
    }

    #[test]
    fn test_trade_value_derived() {
        let trade = Trade {
            trade_id: "t1".to_string(),
            symbol: "VIC".to_string(),
            price: 41.5,
            volume: 200,
            side: TradeSide::Buy,
            time: 0,
        };
        assert!((trade.value() - 8300.0).abs() < 1e-10);
    }

    #[test]
    fn test_level_partition_invariant() {
        let mut level = PriceLevel::default();
        level.add(TradeClass::Buy, 5, 50.0);
        level.add(TradeClass::Sell, 3, 30.0);
        level.add(TradeClass::AfterHourBuy, 2, 20.0);
        level.add(TradeClass::AfterHourSell, 1, 10.0);
        level.add(TradeClass::AfterHourUnknown, 4, 40.0);
        level.finalize();

        assert_eq!(level.total_volume, 15);
        assert_eq!(level.total_value, 150.0);
        assert_eq!(level.volume_imbalance, (5 + 2) - (3 + 1));
        assert_eq!(level.value_imbalance, (50.0 + 20.0) - (30.0 + 10.0));
        assert_eq!(level.total_trades, 5);
    }

    #[test]
    fn test_negative_imbalance() {
        let mut level = PriceLevel::default();
        level.add(TradeClass::Sell, 10, 100.0);
        level.finalize();

        assert_eq!(level.volume_imbalance, -10);
        assert_eq!(level.value_imbalance, -100.0);
    }

    #[test]
    fn test_crossed_book_spread_not_clamped() {
        let book = OrderBookSnapshot {
            symbol: "VIC".to_string(),
            timestamp: "2024-01-02T09:30:00".to_string(),
            match_price: 40.0,
            bid: BookLevel { price: 40.2, volume: 100 },
            ask: BookLevel { price: 40.0, volume: 100 },
            change_percent: 0.0,
            volume: 0,
        };
        assert!(book.spread() < 0.0);
    }
}
