//! End-to-end project scans over temporary trees.

use std::fs;
use std::path::Path;

use phasesync_analysis::{
    render_report, PhaseBucket, ProjectScanner, ReportOptions, TagKind,
};
use phasesync_core::config::ScanConfig;
use phasesync_core::errors::ScanError;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn create_test_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "src/core/task_manager.py",
        "# @phase:core\n# @task:build_web_ui\ndef run():\n    pass\n",
    );
    write(root, "src/utils/logger.py", "def log(msg):\n    print(msg)\n");
    write(root, "tests/test_task_manager.py", "def test_run():\n    assert True\n");
    write(root, "main.py", "# @phase:Deployment\nimport sys\n");
    write(root, "scripts/helper.py", "# @phase:utils\n");
    write(root, "node_modules/pkg/index.js", "module.exports = {}\n");
    write(root, "generated/models.py", "class Model: pass\n");
    write(root, "README.md", "# Project\n");
    write(root, ".phasesyncignore", "generated/\n");
    dir
}

#[test]
fn test_scan_categorizes_files() {
    let dir = create_test_project();
    let scan = ProjectScanner::new(dir.path(), &ScanConfig::default())
        .scan()
        .unwrap();

    let paths: Vec<&str> = scan.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "main.py",
            "scripts/helper.py",
            "src/core/task_manager.py",
            "src/utils/logger.py",
            "tests/test_task_manager.py",
        ]
    );

    let structure = scan.structure();
    assert_eq!(structure.files(PhaseBucket::Core), ["src/core/task_manager.py"]);
    assert_eq!(
        structure.files(PhaseBucket::Utils),
        ["scripts/helper.py", "src/utils/logger.py"]
    );
    assert_eq!(structure.files(PhaseBucket::Tests), ["tests/test_task_manager.py"]);
    assert_eq!(structure.files(PhaseBucket::Other), ["main.py"]);
    assert_eq!(structure.total_files(), 5);
    assert_eq!(scan.stats.total_files, 5);
    assert_eq!(scan.stats.files_failed, 0);
}

#[test]
fn test_scan_weights() {
    let dir = create_test_project();
    let scan = ProjectScanner::new(dir.path(), &ScanConfig::default())
        .scan()
        .unwrap();
    let weights = scan.weights();

    let core = weights.get(PhaseBucket::Core);
    let expected: u64 = scan.files_in(PhaseBucket::Core).map(|f| f.compression.mass).sum();
    assert_eq!(core.mass, expected);
    assert!(core.mass > 0);
    assert_eq!(
        core.tags["src/core/task_manager.py"].get(TagKind::Task),
        Some("build_web_ui")
    );
    assert!(weights.get(PhaseBucket::Tests).tags.is_empty());
    assert_eq!(weights.total_mass(), scan.files.iter().map(|f| f.compression.mass).sum::<u64>());
}

#[test]
fn test_extra_ignore_and_extensions() {
    let dir = create_test_project();
    let config = ScanConfig {
        extensions: vec!["md".to_string(), "js".to_string()],
        extra_ignore: vec!["*.js".to_string()],
        ..Default::default()
    };
    let scan = ProjectScanner::new(dir.path(), &config).scan().unwrap();
    let paths: Vec<&str> = scan.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, ["README.md"]);
}

#[test]
fn test_single_thread_matches_parallel() {
    let dir = create_test_project();
    let parallel = ProjectScanner::new(dir.path(), &ScanConfig::default())
        .scan()
        .unwrap();
    let config = ScanConfig {
        threads: Some(1),
        ..Default::default()
    };
    let serial = ProjectScanner::new(dir.path(), &config).scan().unwrap();
    assert_eq!(parallel.weights(), serial.weights());
}

#[test]
fn test_missing_root() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = ProjectScanner::new(&missing, &ScanConfig::default())
        .scan()
        .unwrap_err();
    assert!(matches!(err, ScanError::RootNotFound { .. }));
}

#[test]
fn test_report_over_scan() {
    let dir = create_test_project();
    let scan = ProjectScanner::new(dir.path(), &ScanConfig::default())
        .scan()
        .unwrap();
    let report = render_report(
        &scan,
        ReportOptions {
            scan_tags: true,
            generate_prompt: true,
        },
    );
    assert!(report.contains("CORE Phase:"));
    assert!(report.contains("  - src/utils/logger.py (Mass: "));
    assert!(report.contains("    @task: build_web_ui"));
    assert!(report.contains("CORE Phase (Reduced: "));
    assert!(report.contains("OTHER Phase (Reduced: "));
}

#[test]
fn test_scan_serializes_to_json() {
    let dir = create_test_project();
    let scan = ProjectScanner::new(dir.path(), &ScanConfig::default())
        .scan()
        .unwrap();
    let json = serde_json::to_value(&scan).unwrap();
    assert_eq!(json["files"].as_array().unwrap().len(), 5);
    assert_eq!(json["files"][2]["bucket"], "core");
    assert_eq!(json["files"][2]["tags"]["task"], "build_web_ui");
}
