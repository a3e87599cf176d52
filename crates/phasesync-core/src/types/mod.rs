//! Collection types shared across the PhaseSync crates.

pub mod collections;

pub use collections::{BTreeMap, FxHashMap, FxHashSet, SmallVec3};
