//! Two-map reduce over the basket set.

use rayon::prelude::*;

use affinity_core::types::collections::SmallVec32;

use crate::baskets::{Basket, BasketIndex};
use crate::pairs::{ItemPair, PairEnumerator};

use super::types::CooccurrenceCounts;

/// Baskets per rayon shard in the parallel path.
const SHARD_SIZE: usize = 1024;

/// Counts, across all orders, how many distinct orders contain each pair
/// and each single item.
///
/// Each basket contributes at most one count per pair and one per item,
/// so duplicate raw rows upstream cannot double count (the index already
/// collapsed them into set membership). The basket-size window applies
/// to pair enumeration only; single-item and total-order counts cover
/// every basket.
pub struct CooccurrenceAggregator {
    enumerator: PairEnumerator,
}

impl CooccurrenceAggregator {
    pub fn new(enumerator: PairEnumerator) -> Self {
        Self { enumerator }
    }

    /// Single-pass sequential aggregation.
    pub fn aggregate(&self, index: &BasketIndex) -> CooccurrenceCounts {
        let mut counts = CooccurrenceCounts::default();
        let mut buf: SmallVec32<_> = SmallVec32::new();
        for (_, basket) in index.baskets() {
            self.accumulate(basket, &mut counts, &mut buf);
        }
        counts
    }

    /// Sharded aggregation: per-shard counts folded on the rayon pool,
    /// merged by summation. Produces the same result as [`aggregate`]
    /// for any shard size.
    ///
    /// [`aggregate`]: Self::aggregate
    pub fn aggregate_parallel(&self, index: &BasketIndex) -> CooccurrenceCounts {
        let baskets: Vec<&Basket> = index.baskets().map(|(_, basket)| basket).collect();
        baskets
            .par_chunks(SHARD_SIZE)
            .map(|shard| {
                let mut counts = CooccurrenceCounts::default();
                let mut buf: SmallVec32<_> = SmallVec32::new();
                for basket in shard {
                    self.accumulate(basket, &mut counts, &mut buf);
                }
                counts
            })
            .reduce(CooccurrenceCounts::default, |mut acc, shard| {
                acc.merge(shard);
                acc
            })
    }

    fn accumulate(
        &self,
        basket: &Basket,
        counts: &mut CooccurrenceCounts,
        buf: &mut SmallVec32<ItemPair>,
    ) {
        counts.total_orders += 1;
        for &item in basket.items() {
            *counts.item_orders.entry(item).or_default() += 1;
        }
        buf.clear();
        self.enumerator.enumerate_into(basket, buf);
        for &pair in buf.iter() {
            *counts.pair_orders.entry(pair).or_default() += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affinity_core::types::{BasketInterner, ItemId, RawTransactionRow, TransactionRow};

    use crate::pairs::ItemPair;

    fn index_of(interner: &BasketInterner, orders: &[(&str, &[&str])]) -> BasketIndex {
        let rows: Vec<TransactionRow> = orders
            .iter()
            .flat_map(|(order, items)| {
                items.iter().map(move |item| {
                    TransactionRow::intern(&RawTransactionRow::new(*order, *item, ""), interner)
                })
            })
            .collect();
        BasketIndex::build(rows)
    }

    fn pair(interner: &BasketInterner, a: &str, b: &str) -> ItemPair {
        ItemPair::new(interner.intern_item(a), interner.intern_item(b)).unwrap()
    }

    fn item(interner: &BasketInterner, name: &str) -> ItemId {
        interner.intern_item(name)
    }

    #[test]
    fn test_worked_scenario() {
        // O1:{A,B}, O2:{A,B,C}, O3:{A}
        let interner = BasketInterner::new();
        let index = index_of(
            &interner,
            &[("O1", &["A", "B"]), ("O2", &["A", "B", "C"]), ("O3", &["A"])],
        );
        let counts = CooccurrenceAggregator::new(PairEnumerator::new(0, None)).aggregate(&index);

        assert_eq!(counts.total_orders, 3);
        assert_eq!(counts.item_count(item(&interner, "A")), 3);
        assert_eq!(counts.item_count(item(&interner, "B")), 2);
        assert_eq!(counts.item_count(item(&interner, "C")), 1);
        assert_eq!(counts.pair_count(&pair(&interner, "A", "B")), 2);
        assert_eq!(counts.pair_count(&pair(&interner, "A", "C")), 1);
        assert_eq!(counts.pair_count(&pair(&interner, "B", "C")), 1);
    }

    #[test]
    fn test_duplicate_rows_count_orders_not_rows() {
        let interner = BasketInterner::new();
        let index = index_of(&interner, &[("O1", &["A", "B", "A", "B", "B"])]);
        let counts = CooccurrenceAggregator::new(PairEnumerator::new(0, None)).aggregate(&index);

        assert_eq!(counts.pair_count(&pair(&interner, "A", "B")), 1);
        assert_eq!(counts.item_count(item(&interner, "A")), 1);
    }

    #[test]
    fn test_window_excludes_pairs_but_not_singles() {
        let interner = BasketInterner::new();
        let big: Vec<String> = (0..11).map(|i| format!("item_{i}")).collect();
        let big_refs: Vec<&str> = big.iter().map(String::as_str).collect();
        let index = index_of(&interner, &[("O1", &["A", "B"]), ("O4", big_refs.as_slice())]);

        let counts =
            CooccurrenceAggregator::new(PairEnumerator::new(2, Some(10))).aggregate(&index);

        // The 11-item order contributes no pairs at all...
        assert_eq!(counts.pair_orders.len(), 1);
        assert_eq!(counts.pair_count(&pair(&interner, "A", "B")), 1);
        // ...but still counts toward singles and the order total.
        assert_eq!(counts.item_count(item(&interner, "item_0")), 1);
        assert_eq!(counts.total_orders, 2);
    }

    #[test]
    fn test_pair_count_bounded_by_singles() {
        let interner = BasketInterner::new();
        let index = index_of(
            &interner,
            &[
                ("O1", &["A", "B", "C"]),
                ("O2", &["A", "B"]),
                ("O3", &["B", "C"]),
                ("O4", &["A"]),
            ],
        );
        let counts = CooccurrenceAggregator::new(PairEnumerator::new(0, None)).aggregate(&index);

        for (pair, &n) in &counts.pair_orders {
            let fa = counts.item_count(pair.first());
            let fb = counts.item_count(pair.second());
            assert!(n <= fa.min(fb));
            assert!(fa.min(fb) <= counts.total_orders);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let interner = BasketInterner::new();
        let mut rows = Vec::new();
        for order in 0..500 {
            for item in 0..(order % 7 + 1) {
                rows.push(TransactionRow::intern(
                    &RawTransactionRow::new(format!("order_{order}"), format!("item_{item}"), ""),
                    &interner,
                ));
            }
        }
        let index = BasketIndex::build(rows);

        let aggregator = CooccurrenceAggregator::new(PairEnumerator::new(2, Some(10)));
        let sequential = aggregator.aggregate(&index);
        let parallel = aggregator.aggregate_parallel(&index);

        assert_eq!(sequential.total_orders, parallel.total_orders);
        assert_eq!(sequential.pair_orders, parallel.pair_orders);
        assert_eq!(sequential.item_orders, parallel.item_orders);
    }
}
