//! Scored rule types.

use serde::{Deserialize, Serialize};

/// A scored association rule for one canonical item pair.
///
/// `product_1 → product_2` is the default reported direction; the
/// reverse confidence is carried alongside. Support and confidence are
/// proportions in `[0, 1]`; lift is a non-negative ratio where `1.0`
/// denotes statistical independence. Derived data, recomputed on demand,
/// never authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRule {
    /// Antecedent of the default reported direction.
    pub product_1: String,
    /// Consequent of the default reported direction.
    pub product_2: String,
    /// Distinct orders containing both products.
    pub orders: u64,
    /// Fraction of all orders containing both products.
    pub support: f64,
    /// Confidence of `product_1 → product_2`.
    pub confidence: f64,
    /// Confidence of `product_2 → product_1`.
    pub confidence_reverse: f64,
    /// Observed-vs-independent co-occurrence ratio.
    pub lift: f64,
}
