//! Collaborator contracts for market data retrieval.
//!
//! The HTTP fetchers and the persistence layer implement these traits
//! elsewhere; the analysis engine only consumes the contracts. An in-memory
//! implementation is provided for tests and demos.

use profile_core::{OrderBookSnapshot, Result, Trade};

/// Produces a finite batch of trades for a symbol, in any order.
pub trait TradeSource {
    /// Fetch up to `limit` recent trades for `symbol`.
    fn recent_trades(&self, symbol: &str, limit: usize) -> Result<Vec<Trade>>;
}

/// Produces the most recent order book snapshot for a symbol, if any.
pub trait OrderBookSource {
    /// Fetch the latest snapshot, or `None` when unavailable.
    fn latest_order_book(&self, symbol: &str) -> Result<Option<OrderBookSnapshot>>;
}

/// In-memory market data source backed by pre-loaded records.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    trades: Vec<Trade>,
    order_book: Option<OrderBookSnapshot>,
}

impl InMemorySource {
    /// Create a source holding the given trades and optional snapshot.
    pub fn new(trades: Vec<Trade>, order_book: Option<OrderBookSnapshot>) -> Self {
        Self { trades, order_book }
    }
}

impl TradeSource for InMemorySource {
    fn recent_trades(&self, symbol: &str, limit: usize) -> Result<Vec<Trade>> {
        Ok(self
            .trades
            .iter()
            .filter(|t| t.symbol == symbol)
            .take(limit)
            .cloned()
            .collect())
    }
}

impl OrderBookSource for InMemorySource {
    fn latest_order_book(&self, symbol: &str) -> Result<Option<OrderBookSnapshot>> {
        Ok(self
            .order_book
            .as_ref()
            .filter(|book| book.symbol == symbol)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_core::{BookLevel, TradeSide};

    fn make_trade(id: &str, symbol: &str) -> Trade {
        Trade {
            trade_id: id.to_string(),
            symbol: symbol.to_string(),
            price: 40.0,
            volume: 100,
            side: TradeSide::Buy,
            time: 0,
        }
    }

    #[test]
    fn test_in_memory_source_filters_by_symbol() {
        let source = InMemorySource::new(
            vec![
                make_trade("a", "VIC"),
                make_trade("b", "VHM"),
                make_trade("c", "VIC"),
            ],
            None,
        );

        let trades = source.recent_trades("VIC", 10).unwrap();
        assert_eq!(trades.len(), 2);
        assert!(trades.iter().all(|t| t.symbol == "VIC"));
    }

    #[test]
    fn test_in_memory_source_respects_limit() {
        let trades = (0..10).map(|i| make_trade(&i.to_string(), "VIC")).collect();
        let source = InMemorySource::new(trades, None);

        assert_eq!(source.recent_trades("VIC", 3).unwrap().len(), 3);
    }

    #[test]
    fn test_in_memory_source_missing_book() {
        let book = OrderBookSnapshot {
            symbol: "VIC".to_string(),
            timestamp: "2024-01-02T10:00:00".to_string(),
            match_price: 40.0,
            bid: BookLevel { price: 39.9, volume: 100 },
            ask: BookLevel { price: 40.1, volume: 100 },
            change_percent: 0.0,
            volume: 0,
        };
        let source = InMemorySource::new(Vec::new(), Some(book));

        assert!(source.latest_order_book("VIC").unwrap().is_some());
        assert!(source.latest_order_book("VHM").unwrap().is_none());
    }
}
