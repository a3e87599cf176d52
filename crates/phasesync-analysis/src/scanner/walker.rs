//! Project walker using ignore + rayon.
//!
//! Discovery runs on one thread so the file list is deterministic; reading,
//! compression and tag extraction run on a scoped rayon pool.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use ignore::WalkBuilder;
use phasesync_core::config::ScanConfig;
use phasesync_core::errors::ScanError;
use phasesync_core::types::FxHashSet;
use rayon::prelude::*;

use super::categorize::categorize;
use super::ignores::IgnorePatterns;
use super::types::{FileRecord, PhaseBucket, ProjectScan, ScanStats};
use crate::swp::{compress, CompressionResult};
use crate::tags::{extract_tags, TagSet};

/// Outcome of processing one discovered file.
enum FileOutcome {
    Analyzed(FileRecord),
    Skipped { path: String, size: u64 },
}

/// Scans one project root.
pub struct ProjectScanner {
    root: PathBuf,
    max_file_size: u64,
    threads: usize,
    follow_symlinks: bool,
    extensions: FxHashSet<String>,
    ignores: Arc<IgnorePatterns>,
}

impl ProjectScanner {
    pub fn new(root: impl Into<PathBuf>, config: &ScanConfig) -> Self {
        let root = root.into();
        let ignores = Arc::new(IgnorePatterns::new(&root, &config.extra_ignore));
        Self {
            max_file_size: config.effective_max_file_size(),
            threads: config.effective_threads(),
            follow_symlinks: config.effective_follow_symlinks(),
            extensions: config.effective_extensions().into_iter().collect(),
            ignores,
            root,
        }
    }

    /// Walk the root and analyze every matching file.
    pub fn scan(&self) -> Result<ProjectScan, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::RootNotFound {
                path: self.root.clone(),
            });
        }
        let start = Instant::now();
        let mut errors = Vec::new();

        let paths = self.collect_files(&mut errors);
        tracing::debug!(root = %self.root.display(), files = paths.len(), "walk complete");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| ScanError::ThreadPool {
                message: e.to_string(),
            })?;
        let outcomes: Vec<FileOutcome> =
            pool.install(|| paths.par_iter().map(|path| self.process_file(path)).collect());

        let mut stats = ScanStats::default();
        let mut files = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                FileOutcome::Analyzed(record) => {
                    if let Some(ref error) = record.error {
                        stats.files_failed += 1;
                        errors.push(format!("{}: {}", record.path, error));
                    }
                    stats.total_bytes += record.size;
                    files.push(record);
                }
                FileOutcome::Skipped { path, size } => {
                    stats.files_skipped_large += 1;
                    errors.push(format!(
                        "{path}: skipped, {size} bytes exceeds max {}",
                        self.max_file_size
                    ));
                }
            }
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));

        stats.total_files = files.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            root = %self.root.display(),
            files = stats.total_files,
            failed = stats.files_failed,
            skipped = stats.files_skipped_large,
            duration_ms = stats.duration_ms,
            "scan complete"
        );

        Ok(ProjectScan {
            root: self.root.clone(),
            files,
            stats,
            errors,
        })
    }

    /// Collect candidate files in path order, honoring ignores and extensions.
    fn collect_files(&self, errors: &mut Vec<String>) -> Vec<PathBuf> {
        let root = self.root.clone();
        let ignores = Arc::clone(&self.ignores);

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let Ok(relative) = entry.path().strip_prefix(&root) else {
                    return true;
                };
                if relative.as_os_str().is_empty() {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !ignores.is_ignored(relative, is_dir)
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file())
                        && self.has_allowed_extension(entry.path())
                    {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "walk error");
                    errors.push(e.to_string());
                }
            }
        }
        files
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext.to_ascii_lowercase()))
    }

    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn process_file(&self, path: &Path) -> FileOutcome {
        let rel_path = self.relative_path(path);
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        if size > self.max_file_size {
            let err = ScanError::MaxFileSizeExceeded {
                path: path.to_path_buf(),
                size,
                max: self.max_file_size,
            };
            tracing::debug!(error = %err, "skipping file");
            return FileOutcome::Skipped {
                path: rel_path,
                size,
            };
        }

        match fs::read_to_string(path) {
            Ok(content) => {
                let compression = compress(&content);
                let tags = extract_tags(&content);
                let bucket = categorize(&rel_path, &tags);
                tracing::debug!(
                    path = %rel_path,
                    bucket = %bucket,
                    mass = compression.mass,
                    reduced = compression.reduced,
                    "analyzed file"
                );
                FileOutcome::Analyzed(FileRecord {
                    path: rel_path,
                    bucket,
                    size,
                    compression,
                    tags,
                    error: None,
                })
            }
            Err(e) => {
                let err = ScanError::io(path, e);
                tracing::warn!(path = %path.display(), error = %err, "failed to analyze file");
                FileOutcome::Analyzed(FileRecord {
                    path: rel_path,
                    bucket: PhaseBucket::Other,
                    size,
                    compression: CompressionResult::default(),
                    tags: TagSet::new(),
                    error: Some(err.to_string()),
                })
            }
        }
    }
}
