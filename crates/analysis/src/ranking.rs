//! Ranking of price levels by total notional value.

use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BTreeMap;

use profile_core::{PriceKey, PriceLevel, SignificantLevel};

/// Project the top `top_n` levels by total value.
///
/// The sort is stable, so levels with equal total value keep the map's
/// price-ascending iteration order. An empty map yields an empty vec.
pub fn significant_levels(
    levels: &BTreeMap<PriceKey, PriceLevel>,
    top_n: usize,
) -> Vec<SignificantLevel> {
    let mut ranked: Vec<SignificantLevel> = levels
        .iter()
        .map(|(&key, level)| SignificantLevel {
            price: key.price(),
            level: level.clone(),
        })
        .collect();

    ranked.sort_by_key(|l| Reverse(OrderedFloat(l.level.total_value)));
    ranked.truncate(top_n);
    ranked
}
