//! Trade classification using bid/ask alignment.
//!
//! Explicitly tagged trades pass through unchanged. Ambiguous (after-hour or
//! untagged) trades are resolved against the best bid/ask of the order book
//! snapshot: at or through the ask is a buy, at or through the bid is a sell,
//! inside the spread stays unknown.

use profile_core::{OrderBookSnapshot, Trade, TradeClass, TradeSide};

/// Resolve a trade's final classification against the book snapshot.
///
/// The ask comparison is evaluated before the bid comparison, so on a locked
/// book (bid == ask) a print at that price classifies as a buy. A crossed
/// book (ask < bid) is not validated here; the same literal comparisons
/// apply, which makes any price at or between the quotes a buy.
pub fn resolve(trade: &Trade, book: &OrderBookSnapshot) -> TradeClass {
    match trade.side {
        TradeSide::Buy => TradeClass::Buy,
        TradeSide::Sell => TradeClass::Sell,
        TradeSide::Ambiguous => {
            if trade.price >= book.ask.price {
                TradeClass::AfterHourBuy
            } else if trade.price <= book.bid.price {
                TradeClass::AfterHourSell
            } else {
                TradeClass::AfterHourUnknown
            }
        }
    }
}
