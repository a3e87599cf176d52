//! Ignore patterns for project scans.
//!
//! Dependency trees, build output, VCS metadata and caches are never
//! analyzed; projects can add their own rules via `.phasesyncignore`,
//! `.gitignore` or `scan.extra_ignore`.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use phasesync_core::constants::IGNORE_FILE;

/// Directories always skipped.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Package managers
    "node_modules",
    "bower_components",
    // Python
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    "site-packages",
    "*.egg-info",
    // Build output
    "target",
    "build",
    "dist",
    "out",
    ".gradle",
    // Vendored code
    "vendor",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // IDE/Editor
    ".idea",
    ".vscode",
    // Caches
    ".cache",
    ".next",
    ".turbo",
    // PhaseSync's own data
    ".phasesync",
];

/// Files always skipped (generated or minified sources).
pub const DEFAULT_IGNORE_FILES: &[&str] = &["*.min.js", "*.generated.*", "*.pb.go", "*_pb2.py"];

/// Compiled gitignore-style matcher rooted at the scan root.
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Build the matcher from defaults, `extra_patterns` and the root's
    /// `.phasesyncignore` / `.gitignore` files if present.
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS.iter().chain(DEFAULT_IGNORE_FILES) {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in extra_patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::warn!(pattern = %pattern, error = %e, "invalid ignore pattern");
            }
        }

        for file in [IGNORE_FILE, ".gitignore"] {
            let path = root.join(file);
            if path.exists() {
                if let Some(e) = builder.add(&path) {
                    tracing::warn!(path = %path.display(), error = %e, "could not read ignore file");
                }
            }
        }

        let gitignore = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignore patterns failed to compile, scanning without them");
            Gitignore::empty()
        });
        Self { gitignore }
    }

    /// Whether `path` (relative to the scan root) should be skipped.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_dirs_ignored() {
        let patterns = IgnorePatterns::new(&PathBuf::from("/project"), &[]);
        assert!(patterns.is_ignored(Path::new("node_modules"), true));
        assert!(patterns.is_ignored(Path::new("src/__pycache__"), true));
        assert!(patterns.is_ignored(Path::new(".git"), true));
        assert!(!patterns.is_ignored(Path::new("src"), true));
        assert!(!patterns.is_ignored(Path::new("tests"), true));
    }

    #[test]
    fn test_default_files_ignored() {
        let patterns = IgnorePatterns::new(&PathBuf::from("/project"), &[]);
        assert!(patterns.is_ignored(Path::new("web/app.min.js"), false));
        assert!(!patterns.is_ignored(Path::new("web/app.js"), false));
    }

    #[test]
    fn test_extra_patterns() {
        let patterns = IgnorePatterns::new(
            &PathBuf::from("/project"),
            &["fixtures/".to_string(), "*.snap".to_string()],
        );
        assert!(patterns.is_ignored(Path::new("fixtures"), true));
        assert!(patterns.is_ignored(Path::new("tests/out.snap"), false));
    }

    #[test]
    fn test_project_ignore_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(".phasesyncignore"), "legacy/\n").unwrap();
        let patterns = IgnorePatterns::new(dir.path(), &[]);
        assert!(patterns.is_ignored(Path::new("legacy"), true));
        assert!(!patterns.is_ignored(Path::new("core"), true));
    }
}
