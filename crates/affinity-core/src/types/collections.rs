//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for a basket's distinct items (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;

/// SmallVec sized for a basket's distinct categories (usually <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec sized for one basket's candidate pairs (8 items -> 28 pairs).
pub type SmallVec32<T> = SmallVec<[T; 32]>;
