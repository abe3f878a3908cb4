//! Canonical pair enumeration.

mod enumerator;
mod types;

pub use enumerator::PairEnumerator;
pub use types::ItemPair;
