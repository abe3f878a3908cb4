//! Rule scoring.

mod scorer;
mod types;

pub use scorer::RuleScorer;
pub use types::ScoredRule;
