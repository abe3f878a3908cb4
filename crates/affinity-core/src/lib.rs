//! affinity-core: shared foundation for the affinity engine.
//!
//! Identifier interning, performance collections, run configuration,
//! error types, and tracing initialization used by the analysis and
//! storage crates.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::AnalysisConfig;
pub use errors::{AnalysisError, ConfigError, StorageError};
pub use types::{
    BasketInterner, CategoryId, ItemId, OrderId, RawTransactionRow, TransactionRow,
};
