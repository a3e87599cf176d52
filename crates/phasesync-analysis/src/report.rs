//! Plain-text project analysis report.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::scanner::{PhaseBucket, ProjectScan};
use crate::tags::TagKind;

const BANNER_WIDTH: usize = 70;
const SECTION_WIDTH: usize = 30;

/// Optional report sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// List the tags of each tagged file under its bucket.
    pub scan_tags: bool,
    /// Append the `@task:` values per bucket as prompt context.
    pub generate_prompt: bool,
}

impl From<&phasesync_core::config::ReportConfig> for ReportOptions {
    fn from(config: &phasesync_core::config::ReportConfig) -> Self {
        Self {
            scan_tags: config.effective_scan_tags(),
            generate_prompt: config.effective_generate_prompt(),
        }
    }
}

/// Render the report for a completed scan.
pub fn render_report(scan: &ProjectScan, options: ReportOptions) -> String {
    let weights = scan.weights();
    let mut out = String::new();

    let _ = writeln!(out, "Project Analysis Results (Using Symbolic Weight Protocol):");
    let _ = writeln!(out, "{}", "=".repeat(BANNER_WIDTH));

    for bucket in PhaseBucket::ALL {
        let weight = weights.get(bucket);
        let _ = writeln!(out, "\n{} Phase:", bucket.as_str().to_uppercase());
        let _ = writeln!(out, "{}", "-".repeat(SECTION_WIDTH));
        let _ = writeln!(out, "Symbolic Mass: {}", weight.mass);
        let _ = writeln!(out, "Reduced Digit: {}", weight.reduced);

        if options.scan_tags && !weight.tags.is_empty() {
            let _ = writeln!(out, "\nPhase Tags:");
            for (path, tags) in &weight.tags {
                let _ = writeln!(out, "  {path}:");
                for (kind, value) in tags.iter() {
                    let _ = writeln!(out, "    @{kind}: {value}");
                }
            }
        }

        let _ = writeln!(out, "\nFiles:");
        for file in scan.files_in(bucket) {
            let _ = writeln!(
                out,
                "  - {} (Mass: {}, Reduced: {})",
                file.path, file.compression.mass, file.compression.reduced
            );
        }
    }

    let _ = writeln!(out, "\nPhase Weights Summary:");
    let _ = writeln!(out, "{}", "-".repeat(SECTION_WIDTH));
    for (bucket, weight) in weights.iter() {
        let _ = writeln!(out, "{bucket}: Mass={}, Reduced={}", weight.mass, weight.reduced);
    }

    if options.generate_prompt {
        let _ = writeln!(out, "\nPhase Prompt Context:");
        let _ = writeln!(out, "{}", "-".repeat(SECTION_WIDTH));
        for (bucket, weight) in weights.iter() {
            if weight.tags.is_empty() {
                continue;
            }
            let _ = writeln!(
                out,
                "\n{} Phase (Reduced: {}):",
                bucket.as_str().to_uppercase(),
                weight.reduced
            );
            for task in weight.tags.values().filter_map(|t| t.get(TagKind::Task)) {
                let _ = writeln!(out, "  - {task}");
            }
        }
    }

    out
}
