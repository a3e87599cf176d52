//! `phasesync weigh` and `tags`: single-file analysis.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use phasesync_analysis::{analyze_file_weight, extract_tags};
use phasesync_core::errors::ScanError;
use serde_json::json;

/// Print the weight analysis of `file` as JSON.
///
/// Failures are reported in-band as `{"error": ..., "success": false}` with
/// exit code 1.
pub fn weigh(file: &Path) -> anyhow::Result<ExitCode> {
    match analyze_file_weight(file) {
        Ok(analysis) => {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!(path = %file.display(), error = %e, "weigh failed");
            let body = json!({ "error": e.to_string(), "success": false });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

pub fn tags(file: &Path) -> anyhow::Result<ExitCode> {
    let content = fs::read_to_string(file).map_err(|e| ScanError::io(file, e))?;
    let tags = extract_tags(&content);
    if tags.is_empty() {
        println!("No phase tags in {}", file.display());
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}:", file.display());
    for (kind, value) in tags.iter() {
        println!("  @{kind}: {value}");
    }
    println!("\nCompressed:");
    for (key, tag) in tags.compressed() {
        println!("  {key} → {} (total {})", tag.value, tag.total);
    }
    Ok(ExitCode::SUCCESS)
}
