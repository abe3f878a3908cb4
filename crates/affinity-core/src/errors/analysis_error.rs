//! Analysis errors.

use super::config_error::ConfigError;

/// Errors that can occur while running an analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("empty dataset: no orders to analyze")]
    EmptyDataset,

    #[error("inconsistent counts for pair ({product_1}, {product_2}): {message}")]
    InconsistentCount {
        product_1: String,
        product_2: String,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}
