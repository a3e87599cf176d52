//! phasesync-analysis: the Symbolic Weight Protocol and everything built on it.
//!
//! - SWP: letter values, digit reduction, word and text compression
//! - Tags: `@phase:` / `@task:` / `@weight:` extraction and compressed tag maps
//! - Symbol map: persisted weight→phase table with bidirectional lookup
//! - Visualizer: step-by-step compression traces and the phase weight report
//! - Scanner: project walking, phase categorization, per-phase weights
//! - Complexity: per-file compression and weight analysis
//! - Report: the project analysis report

pub mod complexity;
pub mod report;
pub mod scanner;
pub mod swp;
pub mod symbol_map;
pub mod tags;
pub mod visualizer;

pub use complexity::{
    analyze_file_complexity, analyze_file_weight, calculate_weight, try_analyze_file_complexity,
    WeightAnalysis,
};
pub use report::{render_report, ReportOptions};
pub use scanner::{
    calculate_phase_weights, categorize, FileRecord, PhaseBucket, PhaseStructure, PhaseWeight,
    PhaseWeights, ProjectScan, ProjectScanner, ScanStats,
};
pub use swp::{
    compress, compress_word, digit_reduce, letter_value, CompressionResult, WordCompression,
};
pub use symbol_map::{SymbolMap, SymbolMapStore, WeightMismatch};
pub use tags::{build_compressed_map, extract_tags, CompressedTag, CompressedTagMap, TagKind, TagSet};
pub use visualizer::{visualize, visualize_phase_weights, CompressionTrace};
