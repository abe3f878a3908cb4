//! Threshold filtering and ranking.

mod ranker;

pub use ranker::RuleFilter;
