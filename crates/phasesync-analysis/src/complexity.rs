//! Per-file complexity and weight analysis.

use std::fs;
use std::path::Path;

use phasesync_core::errors::ScanError;
use serde::Serialize;

use crate::swp::{compress, digit_reduce, letter_values, CompressionResult};

/// Compress the contents of a UTF-8 file.
pub fn try_analyze_file_complexity(path: &Path) -> Result<CompressionResult, ScanError> {
    let content = fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
    Ok(compress(&content))
}

/// Like [`try_analyze_file_complexity`], but unreadable files score zero.
pub fn analyze_file_complexity(path: &Path) -> CompressionResult {
    match try_analyze_file_complexity(path) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "file complexity unavailable, scoring zero");
            CompressionResult::default()
        }
    }
}

/// Letter-by-letter weight breakdown of a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightAnalysis {
    pub label: String,
    /// One value per alphabetic character.
    pub compressed: Vec<u8>,
    pub reduced: u8,
    pub sum: u64,
}

pub fn calculate_weight(text: &str) -> WeightAnalysis {
    let compressed = letter_values(text);
    let sum: u64 = compressed.iter().map(|&v| u64::from(v)).sum();
    WeightAnalysis {
        label: text.to_string(),
        reduced: digit_reduce(sum),
        compressed,
        sum,
    }
}

/// [`calculate_weight`] over the contents of a file.
pub fn analyze_file_weight(path: &Path) -> Result<WeightAnalysis, ScanError> {
    let content = fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
    Ok(calculate_weight(&content))
}
