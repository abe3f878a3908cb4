//! Analysis thresholds and basket-window configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for an association-rule analysis run.
///
/// Defaults match the reference deployment: baskets need at least two
/// distinct items to produce pairs, support ≥ 0.05, confidence ≥ 0.3,
/// and lift strictly above 1.0. The basket-size ceiling is unbounded by
/// default; the reference deployment caps it at 10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Smallest basket (distinct items) eligible for pair enumeration.
    pub min_basket_size: usize,
    /// Largest basket eligible for pair enumeration. `None` = unbounded.
    pub max_basket_size: Option<usize>,
    /// Minimum support a rule must reach (inclusive, in `[0, 1]`).
    pub min_support: f64,
    /// Minimum confidence a rule must reach (inclusive, in `[0, 1]`).
    pub min_confidence: f64,
    /// Lift threshold; rules must exceed it strictly.
    pub min_lift: f64,
    /// Keep only the first N ranked rules. `None` = keep all.
    pub top_n: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_basket_size: 2,
            max_basket_size: None,
            min_support: 0.05,
            min_confidence: 0.3,
            min_lift: 1.0,
            top_n: None,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from TOML and validate it.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject invalid configurations before any computation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max) = self.max_basket_size {
            if self.min_basket_size > max {
                return Err(ConfigError::InvalidValue {
                    field: "min_basket_size".to_string(),
                    message: format!(
                        "min_basket_size ({}) exceeds max_basket_size ({max})",
                        self.min_basket_size
                    ),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.min_support) {
            return Err(ConfigError::InvalidValue {
                field: "min_support".to_string(),
                message: format!("must be within [0, 1], got {}", self.min_support),
            });
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "min_confidence".to_string(),
                message: format!("must be within [0, 1], got {}", self.min_confidence),
            });
        }
        if !self.min_lift.is_finite() || self.min_lift < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "min_lift".to_string(),
                message: format!("must be a finite non-negative ratio, got {}", self.min_lift),
            });
        }
        if self.top_n == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "top_n".to_string(),
                message: "limit of zero would discard every rule".to_string(),
            });
        }
        Ok(())
    }
}
