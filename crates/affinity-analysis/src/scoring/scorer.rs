//! Support / confidence / lift computation.

use tracing::warn;

use affinity_core::types::BasketInterner;
use affinity_core::AnalysisError;

use crate::cooccurrence::CooccurrenceCounts;
use crate::pairs::ItemPair;

use super::types::ScoredRule;

/// Scores canonical pairs against aggregated co-occurrence counts.
///
/// With `n` total orders, `p` pair orders, and `fa`/`fb` single-item
/// orders:
///
/// - `support = p / n`
/// - `confidence(a → b) = p / fa`, `confidence(b → a) = p / fb`
/// - `lift = (p · n) / (fa · fb)`
///
/// Lift uses the closed form, one multiplication over one division, not
/// a chain of successive divisions by `n`.
pub struct RuleScorer<'a> {
    counts: &'a CooccurrenceCounts,
    interner: &'a BasketInterner,
}

impl<'a> RuleScorer<'a> {
    pub fn new(counts: &'a CooccurrenceCounts, interner: &'a BasketInterner) -> Self {
        Self { counts, interner }
    }

    /// Score one canonical pair.
    ///
    /// Fails with [`AnalysisError::EmptyDataset`] when there are no
    /// orders, and with [`AnalysisError::InconsistentCount`] when a
    /// member's single-order count is zero or smaller than the pair
    /// count; a score of infinity or NaN is never emitted.
    pub fn score(&self, pair: ItemPair) -> Result<ScoredRule, AnalysisError> {
        let n = self.counts.total_orders;
        if n == 0 {
            return Err(AnalysisError::EmptyDataset);
        }

        let p = self.counts.pair_count(&pair);
        let fa = self.counts.item_count(pair.first());
        let fb = self.counts.item_count(pair.second());

        if fa == 0 || fb == 0 || p > fa.min(fb) {
            return Err(AnalysisError::InconsistentCount {
                product_1: self.interner.resolve_item(pair.first()).to_string(),
                product_2: self.interner.resolve_item(pair.second()).to_string(),
                message: format!("pair orders {p} against single orders ({fa}, {fb})"),
            });
        }

        Ok(ScoredRule {
            product_1: self.interner.resolve_item(pair.first()).to_string(),
            product_2: self.interner.resolve_item(pair.second()).to_string(),
            orders: p,
            support: p as f64 / n as f64,
            confidence: p as f64 / fa as f64,
            confidence_reverse: p as f64 / fb as f64,
            lift: (p as f64 * n as f64) / (fa as f64 * fb as f64),
        })
    }

    /// Score every observed pair.
    ///
    /// Pairs with inconsistent counts are logged and skipped rather than
    /// aborting the whole run; an empty dataset fails the batch.
    pub fn score_all(&self) -> Result<Vec<ScoredRule>, AnalysisError> {
        if self.counts.total_orders == 0 {
            return Err(AnalysisError::EmptyDataset);
        }

        let mut rules = Vec::with_capacity(self.counts.pair_orders.len());
        for pair in self.counts.pair_orders.keys() {
            match self.score(*pair) {
                Ok(rule) => rules.push(rule),
                Err(err @ AnalysisError::InconsistentCount { .. }) => {
                    warn!(error = %err, "skipping rule with inconsistent counts");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(rules)
    }
}
