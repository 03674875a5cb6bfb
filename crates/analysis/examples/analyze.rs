//! Run the analyzer over an in-memory trade batch and print the summary.
//!
//! ```sh
//! cargo run --example analyze -p profile-analysis
//! ```

use anyhow::Result;

use profile_analysis::Analyzer;
use profile_core::{AnalysisConfig, BookLevel, OrderBookSnapshot, Trade, TradeSide};
use profile_ingestion::InMemorySource;

fn sample_trades() -> Vec<Trade> {
    let raw = [
        // (id, price, volume, raw tag, epoch seconds)
        ("t9", 40.25, 300, "bu", 1_704_166_200),
        ("t8", 40.25, 150, "sd", 1_704_166_140),
        ("t7", 40.30, 500, "", 1_704_166_080),
        ("t6", 40.20, 220, "bu", 1_704_166_020),
        ("t5", 40.15, 400, "sd", 1_704_165_960),
        ("t4", 40.25, 180, "after-hour", 1_704_165_900),
        ("t3", 40.10, 700, "sd", 1_704_165_840),
        ("t2", 40.20, 260, "bu", 1_704_165_780),
        ("t1", 40.05, 900, "", 1_704_165_720),
    ];

    raw.iter()
        .map(|&(id, price, volume, tag, time)| Trade {
            trade_id: id.to_string(),
            symbol: "VIC".to_string(),
            price,
            volume,
            side: TradeSide::from_tag(tag),
            time,
        })
        .collect()
}

fn sample_book() -> OrderBookSnapshot {
    OrderBookSnapshot {
        symbol: "VIC".to_string(),
        timestamp: "2024-01-02T10:30:00".to_string(),
        match_price: 40.25,
        bid: BookLevel { price: 40.20, volume: 1200 },
        ask: BookLevel { price: 40.30, volume: 800 },
        change_percent: 0.62,
        volume: 300,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let source = InMemorySource::new(sample_trades(), Some(sample_book()));
    let config = AnalysisConfig::default();
    let analyzer = Analyzer::new(&config)?;

    let summary = analyzer.analyze_symbol("VIC", &source, &source, config.trades_to_fetch)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
