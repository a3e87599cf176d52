//! Project scanner: walk a source tree, compress every file, sort files into
//! phase buckets and aggregate per-bucket weights.
//!
//! Discovery is a single-threaded walk honoring default ignores, `.gitignore`
//! and `.phasesyncignore`; per-file reading and compression run on a rayon
//! pool.

pub mod categorize;
pub mod ignores;
pub mod types;
pub mod walker;
pub mod weights;

pub use categorize::categorize;
pub use ignores::{IgnorePatterns, DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_FILES};
pub use types::{FileRecord, PhaseBucket, PhaseStructure, ProjectScan, ScanStats};
pub use walker::ProjectScanner;
pub use weights::{calculate_phase_weights, PhaseWeight, PhaseWeights};
