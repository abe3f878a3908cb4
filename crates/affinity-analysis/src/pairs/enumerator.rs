//! Candidate pair enumeration with a basket-size window.

use affinity_core::types::collections::SmallVec32;
use affinity_core::AnalysisConfig;

use crate::baskets::Basket;

use super::types::ItemPair;

/// Enumerates the canonical item pairs of a basket.
///
/// Baskets whose distinct-item count falls outside the configured window
/// yield no pairs at all; an in-window basket of `n` items yields exactly
/// `n * (n - 1) / 2` pairs. Pure and deterministic: the same basket
/// always produces the same pair set.
#[derive(Debug, Clone)]
pub struct PairEnumerator {
    min_size: usize,
    max_size: Option<usize>,
}

impl PairEnumerator {
    /// Window over distinct-item counts; `None` leaves the top unbounded.
    pub fn new(min_size: usize, max_size: Option<usize>) -> Self {
        Self { min_size, max_size }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.min_basket_size, config.max_basket_size)
    }

    /// Whether a basket of `len` distinct items is eligible for pairs.
    pub fn in_window(&self, len: usize) -> bool {
        len >= self.min_size && self.max_size.map_or(true, |max| len <= max)
    }

    /// Number of pairs a basket of `len` distinct items yields:
    /// `len * (len - 1) / 2` inside the window, zero outside it.
    pub fn pair_count_for(&self, len: usize) -> usize {
        if self.in_window(len) {
            len * len.saturating_sub(1) / 2
        } else {
            0
        }
    }

    /// Append every canonical pair of `basket` to `out`.
    ///
    /// Basket items are sorted by interner key, so the `i < j` sweep
    /// emits pairs already in canonical form.
    pub fn enumerate_into(&self, basket: &Basket, out: &mut SmallVec32<ItemPair>) {
        let items = basket.items();
        if !self.in_window(items.len()) {
            return;
        }
        for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                out.push(ItemPair::from_sorted(items[i], items[j]));
            }
        }
    }

    /// Convenience wrapper returning a fresh buffer.
    pub fn enumerate(&self, basket: &Basket) -> SmallVec32<ItemPair> {
        let mut out = SmallVec32::new();
        self.enumerate_into(basket, &mut out);
        out
    }
}

impl Default for PairEnumerator {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
