//! Basket index construction.

use affinity_core::types::collections::FxHashMap;
use affinity_core::types::{OrderId, TransactionRow};

use super::types::Basket;

/// Groups transaction rows into per-order baskets.
///
/// Duplicate (order, item) rows collapse into a single membership, so
/// downstream counts are per distinct order rather than per raw row.
/// Empty input yields an empty index with zero total orders.
#[derive(Debug, Default)]
pub struct BasketIndex {
    baskets: FxHashMap<OrderId, Basket>,
}

impl BasketIndex {
    /// Build the index from interned rows.
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = TransactionRow>,
    {
        let mut baskets: FxHashMap<OrderId, Basket> = FxHashMap::default();
        for row in rows {
            let basket = baskets.entry(row.order).or_default();
            basket.insert_item(row.item);
            basket.insert_category(row.category);
        }
        Self { baskets }
    }

    /// Number of distinct orders seen.
    pub fn total_orders(&self) -> u64 {
        self.baskets.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.baskets.is_empty()
    }

    /// Iterate baskets; no ordering guarantee.
    pub fn baskets(&self) -> impl Iterator<Item = (&OrderId, &Basket)> {
        self.baskets.iter()
    }

    pub fn get(&self, order: &OrderId) -> Option<&Basket> {
        self.baskets.get(order)
    }

    /// Distinct-item count per order.
    pub fn distinct_item_counts(&self) -> FxHashMap<OrderId, usize> {
        self.baskets
            .iter()
            .map(|(order, basket)| (*order, basket.len()))
            .collect()
    }
}
