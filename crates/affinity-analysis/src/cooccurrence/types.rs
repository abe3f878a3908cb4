//! Co-occurrence count maps.

use affinity_core::types::collections::FxHashMap;
use affinity_core::types::ItemId;

use crate::pairs::ItemPair;

/// Order-level co-occurrence counts.
///
/// `pair_orders` counts distinct orders whose basket contains both
/// members of a pair (window-filtered); `item_orders` counts distinct
/// orders containing an item, over every basket regardless of window;
/// `total_orders` counts every distinct order in the input. Invariant:
/// `pair_orders[(a, b)] <= min(item_orders[a], item_orders[b]) <=
/// total_orders`. All counters are monotonic; there is no decrement.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceCounts {
    pub pair_orders: FxHashMap<ItemPair, u64>,
    pub item_orders: FxHashMap<ItemId, u64>,
    pub total_orders: u64,
}

impl CooccurrenceCounts {
    /// Orders containing both members of `pair`; zero if never seen.
    pub fn pair_count(&self, pair: &ItemPair) -> u64 {
        self.pair_orders.get(pair).copied().unwrap_or(0)
    }

    /// Orders containing `item`; zero if never seen.
    pub fn item_count(&self, item: ItemId) -> u64 {
        self.item_orders.get(&item).copied().unwrap_or(0)
    }

    /// Merge another shard into this one.
    ///
    /// Counts are commutative, associative sums, so shard merge order
    /// does not affect the result.
    pub fn merge(&mut self, other: CooccurrenceCounts) {
        for (pair, n) in other.pair_orders {
            *self.pair_orders.entry(pair).or_default() += n;
        }
        for (item, n) in other.item_orders {
            *self.item_orders.entry(item).or_default() += n;
        }
        self.total_orders += other.total_orders;
    }
}
