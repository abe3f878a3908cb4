//! Rule filtering and deterministic ordering.

use std::cmp::Ordering;

use affinity_core::AnalysisConfig;

use crate::scoring::ScoredRule;

/// Thresholds applied to scored rules.
///
/// Support and confidence are inclusive (`>=`); lift is strict (`>`), so
/// a statistically independent pair (lift exactly 1.0) never passes the
/// default `min_lift = 1.0`. Thresholds apply to the default reported
/// direction's confidence.
#[derive(Debug, Clone)]
pub struct RuleFilter {
    pub min_support: f64,
    pub min_confidence: f64,
    pub min_lift: f64,
    pub top_n: Option<usize>,
}

impl RuleFilter {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            min_support: config.min_support,
            min_confidence: config.min_confidence,
            min_lift: config.min_lift,
            top_n: config.top_n,
        }
    }

    /// Filter, rank, and truncate.
    ///
    /// Surviving rules are ordered by support descending, lift
    /// descending, then product names ascending for determinism. The
    /// `top_n` cut happens after sorting, so a "top 10" view reflects
    /// the full filtered ranking. Returns a new vector; the input is
    /// untouched.
    pub fn filter_and_rank(&self, rules: &[ScoredRule]) -> Vec<ScoredRule> {
        let mut kept: Vec<ScoredRule> = rules
            .iter()
            .filter(|rule| {
                rule.support >= self.min_support
                    && rule.confidence >= self.min_confidence
                    && rule.lift > self.min_lift
            })
            .cloned()
            .collect();

        kept.sort_by(|a, b| {
            b.support
                .partial_cmp(&a.support)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.lift.partial_cmp(&a.lift).unwrap_or(Ordering::Equal))
                .then_with(|| a.product_1.cmp(&b.product_1))
                .then_with(|| a.product_2.cmp(&b.product_2))
        });

        if let Some(limit) = self.top_n {
            kept.truncate(limit);
        }
        kept
    }
}

impl Default for RuleFilter {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
