//! End-to-end analysis orchestration.
//!
//! Interning → basket index → co-occurrence aggregation → scoring →
//! filtering/ranking, with per-phase structured logging. The category
//! variant runs over the same basket index.

use std::time::Instant;

use serde::Serialize;
use tracing::info;

use affinity_core::types::{BasketInterner, RawTransactionRow, TransactionRow};
use affinity_core::{AnalysisConfig, AnalysisError};

use crate::baskets::BasketIndex;
use crate::categories::{count_category_pairs, CategoryPairCount};
use crate::cooccurrence::CooccurrenceAggregator;
use crate::pairs::PairEnumerator;
use crate::ranking::RuleFilter;
use crate::scoring::{RuleScorer, ScoredRule};

/// Basket count above which aggregation moves to the rayon pool.
const PARALLEL_THRESHOLD: usize = 4096;

/// Output of a full analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Ranked rules that survived the thresholds.
    pub rules: Vec<ScoredRule>,
    /// Category-pair counts over the same baskets.
    pub category_pairs: Vec<CategoryPairCount>,
    /// Distinct orders in the input.
    pub orders_total: u64,
    /// Baskets inside the pair-enumeration window.
    pub baskets_in_window: u64,
    /// Scored pairs before thresholds were applied.
    pub candidate_pairs: u64,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
}

/// Run the full association-rule pipeline over raw transaction rows.
///
/// The configuration is validated up front; an invalid one fails the
/// run before any computation. Fails with
/// [`AnalysisError::EmptyDataset`] when the input has no orders.
pub fn run_analysis<I>(rows: I, config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError>
where
    I: IntoIterator<Item = RawTransactionRow>,
{
    config.validate()?;
    let start = Instant::now();

    let interner = BasketInterner::new();
    let interned: Vec<TransactionRow> = rows
        .into_iter()
        .map(|raw| TransactionRow::intern(&raw, &interner))
        .collect();
    info!(
        rows = interned.len(),
        items = interner.item_count(),
        "interned transaction rows"
    );

    let index = BasketIndex::build(interned);
    if index.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let enumerator = PairEnumerator::from_config(config);
    let baskets_in_window = index
        .baskets()
        .filter(|(_, basket)| enumerator.in_window(basket.len()))
        .count() as u64;
    info!(
        orders = index.total_orders(),
        in_window = baskets_in_window,
        "built basket index"
    );

    let aggregator = CooccurrenceAggregator::new(enumerator);
    let counts = if index.total_orders() as usize >= PARALLEL_THRESHOLD {
        aggregator.aggregate_parallel(&index)
    } else {
        aggregator.aggregate(&index)
    };
    info!(
        pairs = counts.pair_orders.len(),
        items = counts.item_orders.len(),
        "aggregated co-occurrence counts"
    );

    let scorer = RuleScorer::new(&counts, &interner);
    let scored = scorer.score_all()?;
    let candidate_pairs = scored.len() as u64;

    let filter = RuleFilter::from_config(config);
    let rules = filter.filter_and_rank(&scored);
    info!(
        kept = rules.len(),
        dropped = candidate_pairs - rules.len() as u64,
        "filtered and ranked rules"
    );

    let category_pairs = count_category_pairs(&index, &interner);

    Ok(AnalysisReport {
        rules,
        category_pairs,
        orders_total: index.total_orders(),
        baskets_in_window,
        candidate_pairs,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
