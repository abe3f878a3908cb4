//! affinity-analysis: the market-basket pair-association engine.
//!
//! - Baskets: groups transaction rows into per-order distinct-item sets
//! - Pairs: canonical pair enumeration with a basket-size window
//! - Cooccurrence: order-level pair and single-item counts
//! - Scoring: support / confidence / lift per pair
//! - Ranking: threshold filtering and deterministic ordering
//! - Categories: category-pair co-occurrence counts
//! - Pipeline: end-to-end orchestration
//!
//! Data flows strictly left to right: rows → basket index → pair
//! enumeration → co-occurrence counts → scored rules → ranked table.
//! No stage mutates an upstream stage's state; the engine is a pure
//! function of its input snapshot.

pub mod baskets;
pub mod categories;
pub mod cooccurrence;
pub mod pairs;
pub mod pipeline;
pub mod ranking;
pub mod scoring;

pub use baskets::{Basket, BasketIndex};
pub use categories::{count_category_pairs, CategoryPairCount};
pub use cooccurrence::{CooccurrenceAggregator, CooccurrenceCounts};
pub use pairs::{ItemPair, PairEnumerator};
pub use pipeline::{run_analysis, AnalysisReport};
pub use ranking::RuleFilter;
pub use scoring::{RuleScorer, ScoredRule};
