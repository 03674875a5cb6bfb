//! Analysis engine.
//!
//! Ties classification, accumulation, ranking and summarization into the
//! single `analyze` entry point. Each call is a pure function of its inputs;
//! no state is retained between calls.

use chrono::FixedOffset;
use tracing::{debug, info};

use profile_core::{
    AnalysisConfig, Error, OrderBookSnapshot, PriceKey, Result, SessionSummary, Trade,
};
use profile_ingestion::{OrderBookSource, TradeSource};

use crate::accumulator::accumulate;
use crate::ranking::significant_levels;
use crate::summary::{market_status, trading_summary};

/// Volume-profile analyzer for one instrument batch.
pub struct Analyzer {
    tz: FixedOffset,
    top_n: usize,
}

impl Analyzer {
    /// Create an analyzer from configuration. Fails if the configured
    /// timezone string does not parse.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        Ok(Self {
            tz: config.tz_offset()?,
            top_n: config.significant_levels,
        })
    }

    /// Create an analyzer from an already-resolved offset.
    pub fn with_timezone(tz: FixedOffset, top_n: usize) -> Self {
        Self { tz, top_n }
    }

    /// Analyze a trade batch against an order book snapshot.
    ///
    /// Fails with [`Error::MissingOrderBook`] when no snapshot is supplied;
    /// an empty trade batch is not an error and yields an all-zero summary.
    pub fn analyze(
        &self,
        trades: &[Trade],
        order_book: Option<&OrderBookSnapshot>,
    ) -> Result<SessionSummary> {
        let book = order_book.ok_or_else(|| {
            Error::missing_order_book(
                trades
                    .first()
                    .map(|t| t.symbol.as_str())
                    .unwrap_or("unknown"),
            )
        })?;

        debug!(
            symbol = %book.symbol,
            trades = trades.len(),
            bid = book.bid.price,
            ask = book.ask.price,
            "analyzing trade batch"
        );

        let levels = accumulate(trades, book, self.tz);
        let significant = significant_levels(&levels, self.top_n);
        let summary = trading_summary(trades, book, levels.len());

        let bid_level = levels
            .get(&PriceKey::from_price(book.bid.price))
            .cloned()
            .unwrap_or_default();
        let ask_level = levels
            .get(&PriceKey::from_price(book.ask.price))
            .cloned()
            .unwrap_or_default();

        info!(
            symbol = %book.symbol,
            levels = levels.len(),
            total_volume = summary.volume.total,
            buy_ratio = summary.volume.buy_ratio,
            "analysis complete"
        );

        Ok(SessionSummary {
            timestamp: book.timestamp.clone(),
            symbol: book.symbol.clone(),
            market_status: market_status(book),
            significant_levels: significant,
            bid_level,
            ask_level,
            trading_summary: summary,
        })
    }

    /// Fetch inputs from the collaborator sources and analyze.
    pub fn analyze_symbol<T, B>(
        &self,
        symbol: &str,
        trades: &T,
        books: &B,
        limit: usize,
    ) -> Result<SessionSummary>
    where
        T: TradeSource,
        B: OrderBookSource,
    {
        let book = books
            .latest_order_book(symbol)?
            .ok_or_else(|| Error::missing_order_book(symbol))?;
        let batch = trades.recent_trades(symbol, limit)?;
        self.analyze(&batch, Some(&book))
    }
}
