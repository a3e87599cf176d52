//! Scanner data types: PhaseBucket, FileRecord, PhaseStructure, ProjectScan.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::swp::CompressionResult;
use crate::tags::TagSet;

/// Development phase a file is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseBucket {
    Core,
    Utils,
    Tests,
    Other,
}

impl PhaseBucket {
    /// All buckets in report order.
    pub const ALL: [PhaseBucket; 4] = [
        PhaseBucket::Core,
        PhaseBucket::Utils,
        PhaseBucket::Tests,
        PhaseBucket::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseBucket::Core => "core",
            PhaseBucket::Utils => "utils",
            PhaseBucket::Tests => "tests",
            PhaseBucket::Other => "other",
        }
    }

    /// Bucket named exactly `name` (already lowercased), if any.
    pub fn from_name(name: &str) -> Option<PhaseBucket> {
        Self::ALL.into_iter().find(|b| b.as_str() == name)
    }
}

impl std::fmt::Display for PhaseBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One analyzed file.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    pub bucket: PhaseBucket,
    pub size: u64,
    /// All zero when the file could not be read.
    pub compression: CompressionResult,
    pub tags: TagSet,
    /// Read failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Relative file paths per bucket. All four buckets are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhaseStructure {
    buckets: BTreeMap<PhaseBucket, Vec<String>>,
}

impl Default for PhaseStructure {
    fn default() -> Self {
        Self {
            buckets: PhaseBucket::ALL
                .into_iter()
                .map(|bucket| (bucket, Vec::new()))
                .collect(),
        }
    }
}

impl PhaseStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bucket: PhaseBucket, path: impl Into<String>) {
        self.buckets.entry(bucket).or_default().push(path.into());
    }

    pub fn files(&self, bucket: PhaseBucket) -> &[String] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(bucket, files)` in report order.
    pub fn iter(&self) -> impl Iterator<Item = (PhaseBucket, &[String])> {
        self.buckets
            .iter()
            .map(|(bucket, files)| (*bucket, files.as_slice()))
    }

    pub fn total_files(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Aggregate statistics for a scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    pub total_files: usize,
    pub files_failed: usize,
    pub files_skipped_large: usize,
    pub total_bytes: u64,
    pub duration_ms: u64,
}

/// Result of scanning one project root.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectScan {
    pub root: PathBuf,
    /// Sorted by relative path.
    pub files: Vec<FileRecord>,
    pub stats: ScanStats,
    /// Non-fatal problems (walk errors, unreadable or oversized files).
    pub errors: Vec<String>,
}

impl ProjectScan {
    /// Files grouped by bucket, each bucket in path order.
    pub fn structure(&self) -> PhaseStructure {
        let mut structure = PhaseStructure::new();
        for file in &self.files {
            structure.push(file.bucket, file.path.clone());
        }
        structure
    }

    pub fn files_in(&self, bucket: PhaseBucket) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().filter(move |f| f.bucket == bucket)
    }
}
