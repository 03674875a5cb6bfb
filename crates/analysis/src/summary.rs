//! Session-wide summarization.
//!
//! Aggregates directly over the original trade list (not the per-level map)
//! using the same classification rule per trade, then derives buy ratios and
//! the volume-weighted average price.

use profile_core::{
    AfterHourValue, AfterHourVolume, MarketStatus, OrderBookSnapshot, Trade, TradeClass,
    TradingSummary, ValueTotals, VolumeTotals,
};
use profile_ingestion::resolve;

/// Build the market status block from the book snapshot.
pub fn market_status(book: &OrderBookSnapshot) -> MarketStatus {
    MarketStatus {
        current_price: book.match_price,
        bid_price: book.bid.price,
        bid_volume: book.bid.volume,
        ask_price: book.ask.price,
        ask_volume: book.ask.volume,
        spread: book.spread(),
    }
}

/// Summarize the whole batch.
///
/// Buy ratios exclude the direction-indeterminate unknown bucket from the
/// denominator; every ratio and the average price default to 0 when their
/// denominator is 0.
pub fn trading_summary(
    trades: &[Trade],
    book: &OrderBookSnapshot,
    unique_price_levels: usize,
) -> TradingSummary {
    let mut buy_volume = 0u64;
    let mut sell_volume = 0u64;
    let mut after_hour_buy = 0u64;
    let mut after_hour_sell = 0u64;
    let mut after_hour_unknown = 0u64;
    let mut buy_value = 0.0f64;
    let mut sell_value = 0.0f64;
    let mut after_hour_buy_value = 0.0f64;
    let mut after_hour_sell_value = 0.0f64;
    let mut after_hour_unknown_value = 0.0f64;

    for trade in trades {
        let value = trade.value();
        match resolve(trade, book) {
            TradeClass::Buy => {
                buy_volume += trade.volume;
                buy_value += value;
            }
            TradeClass::Sell => {
                sell_volume += trade.volume;
                sell_value += value;
            }
            TradeClass::AfterHourBuy => {
                after_hour_buy += trade.volume;
                after_hour_buy_value += value;
            }
            TradeClass::AfterHourSell => {
                after_hour_sell += trade.volume;
                after_hour_sell_value += value;
            }
            TradeClass::AfterHourUnknown => {
                after_hour_unknown += trade.volume;
                after_hour_unknown_value += value;
            }
        }
    }

    let total_volume =
        buy_volume + sell_volume + after_hour_buy + after_hour_sell + after_hour_unknown;
    let total_value = buy_value
        + sell_value
        + after_hour_buy_value
        + after_hour_sell_value
        + after_hour_unknown_value;

    let directional_volume = buy_volume + sell_volume + after_hour_buy + after_hour_sell;
    let volume_buy_ratio = if directional_volume > 0 {
        (buy_volume + after_hour_buy) as f64 / directional_volume as f64
    } else {
        0.0
    };

    let directional_value =
        buy_value + sell_value + after_hour_buy_value + after_hour_sell_value;
    let value_buy_ratio = if directional_value > 0.0 {
        (buy_value + after_hour_buy_value) / directional_value
    } else {
        0.0
    };

    let average_price = if total_volume > 0 {
        total_value / total_volume as f64
    } else {
        0.0
    };

    TradingSummary {
        period: format!("last {} trades", trades.len()),
        total_trades: trades.len(),
        volume: VolumeTotals {
            buy: buy_volume,
            sell: sell_volume,
            after_hour: AfterHourVolume {
                buy: after_hour_buy,
                sell: after_hour_sell,
                unknown: after_hour_unknown,
                total: after_hour_buy + after_hour_sell + after_hour_unknown,
            },
            total: total_volume,
            buy_ratio: volume_buy_ratio,
        },
        value: ValueTotals {
            buy: buy_value,
            sell: sell_value,
            after_hour: AfterHourValue {
                buy: after_hour_buy_value,
                sell: after_hour_sell_value,
                unknown: after_hour_unknown_value,
                total: after_hour_buy_value + after_hour_sell_value + after_hour_unknown_value,
            },
            total: total_value,
            buy_ratio: value_buy_ratio,
        },
        unique_price_levels,
        average_price,
    }
}
