//! Data structures and string interning for affinity.
//! FxHashMap, SmallVec, lasso-based interning, Spur-based ID types.

pub mod collections;
pub mod identifiers;
pub mod interning;
pub mod transaction;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{CategoryId, ItemId, OrderId};
pub use interning::BasketInterner;
pub use transaction::{RawTransactionRow, TransactionRow};
