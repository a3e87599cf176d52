//! `phasesync analyze`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use phasesync_analysis::{
    render_report, PhaseStructure, PhaseWeights, ProjectScan, ProjectScanner, ReportOptions,
};
use phasesync_core::config::CliOverrides;
use serde::Serialize;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Project root to analyze
    pub path: PathBuf,
    /// Show the phase tags found in each file
    #[arg(long)]
    pub scan_tags: bool,
    /// Print the tasks of each phase as prompt context
    #[arg(long)]
    pub generate_prompt: bool,
    /// Print the scan as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
    /// Worker threads (0 = auto)
    #[arg(long)]
    pub threads: Option<usize>,
    /// Skip files larger than this many bytes
    #[arg(long)]
    pub max_file_size: Option<u64>,
    /// Extensions to analyze (repeatable)
    #[arg(long = "ext")]
    pub extensions: Vec<String>,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    #[serde(flatten)]
    scan: &'a ProjectScan,
    structure: PhaseStructure,
    weights: PhaseWeights,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<ExitCode> {
    let overrides = CliOverrides {
        scan_max_file_size: args.max_file_size,
        scan_threads: args.threads,
        scan_extensions: args.extensions,
        report_scan_tags: args.scan_tags.then_some(true),
        report_generate_prompt: args.generate_prompt.then_some(true),
        ..Default::default()
    };
    let config = super::load_config(&args.path, &overrides)?;

    tracing::info!(path = %args.path.display(), "analyzing project");
    let scan = ProjectScanner::new(&args.path, &config.scan).scan()?;

    if args.json {
        let output = AnalyzeOutput {
            structure: scan.structure(),
            weights: scan.weights(),
            scan: &scan,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_report(&scan, ReportOptions::from(&config.report)));
    }
    Ok(ExitCode::SUCCESS)
}
