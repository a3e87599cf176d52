//! Persisted weight→phase table with bidirectional lookup.

pub mod map;
pub mod store;

pub use map::{SymbolMap, WeightMismatch};
pub use store::SymbolMapStore;
