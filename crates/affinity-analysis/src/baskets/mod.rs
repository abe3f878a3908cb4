//! Per-order basket grouping.

mod index;
mod types;

pub use index::BasketIndex;
pub use types::Basket;
