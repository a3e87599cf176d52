//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec sized for the tag set (at most one entry per tag kind).
pub type SmallVec3<T> = SmallVec<[T; 3]>;
