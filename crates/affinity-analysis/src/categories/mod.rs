//! Category-pair co-occurrence counts.
//!
//! The category variant of the pair engine: same per-order grouping and
//! canonical pairing, keyed by category instead of item. Counts only;
//! no support/confidence/lift is derived for categories.

use serde::{Deserialize, Serialize};

use rustc_hash::FxHashMap;

use affinity_core::types::{BasketInterner, CategoryId};

use crate::baskets::BasketIndex;

/// A pair of categories and the number of orders containing both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPairCount {
    pub category_1: String,
    pub category_2: String,
    pub orders: u64,
}

/// Count co-occurring category pairs across all baskets.
///
/// A basket's categories are the distinct categories of its items, so an
/// order contributes one count per category pair no matter how many
/// items share those categories. Results are sorted by order count
/// descending, then by names for determinism.
pub fn count_category_pairs(
    index: &BasketIndex,
    interner: &BasketInterner,
) -> Vec<CategoryPairCount> {
    let mut counts: FxHashMap<(CategoryId, CategoryId), u64> = FxHashMap::default();
    for (_, basket) in index.baskets() {
        let categories = basket.categories();
        for i in 0..categories.len() {
            for j in (i + 1)..categories.len() {
                *counts.entry((categories[i], categories[j])).or_default() += 1;
            }
        }
    }

    let mut result: Vec<CategoryPairCount> = counts
        .into_iter()
        .map(|((a, b), orders)| CategoryPairCount {
            category_1: interner.resolve_category(a).to_string(),
            category_2: interner.resolve_category(b).to_string(),
            orders,
        })
        .collect();

    result.sort_by(|x, y| {
        y.orders
            .cmp(&x.orders)
            .then_with(|| x.category_1.cmp(&y.category_1))
            .then_with(|| x.category_2.cmp(&y.category_2))
    });
    result
}
