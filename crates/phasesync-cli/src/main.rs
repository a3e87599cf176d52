//! PhaseSync CLI
//!
//! # Commands
//!
//! - `analyze`: scan a project and report per-phase symbolic weights
//! - `compress` / `word` / `visualize`: SWP arithmetic on text and tokens
//! - `phases`, `lookup`, `symbols`: the persisted weight→phase table
//! - `weigh`, `tags`: single-file analysis
//!
//! Exit code 1 on error. Errors print as `[CODE] message` on stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use phasesync_core::constants::VERSION;

mod commands;
mod error;

/// PhaseSync - Symbolic Weight Protocol tooling
#[derive(Parser)]
#[command(name = "phasesync")]
#[command(version = VERSION)]
#[command(about = "Compress text to symbolic weights and map projects onto development phases")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a project's structure and calculate phase weights
    Analyze(commands::analyze::AnalyzeArgs),
    /// Compress a block of text
    Compress {
        /// Text to compress
        text: String,
    },
    /// Compress a single (possibly compound) token
    Word {
        /// Token such as `Python` or `build_web_ui`
        token: String,
    },
    /// Show the step-by-step compression of a token
    Visualize {
        token: String,
    },
    /// Render every phase in the symbol map with its compression trace
    Phases {
        /// Symbol map path (default: config or data/symbol_map.json)
        #[arg(long)]
        map: Option<PathBuf>,
    },
    /// Look up the symbol map in either direction
    Lookup {
        #[command(subcommand)]
        action: commands::symbols::LookupCommands,
        #[arg(long, global = true)]
        map: Option<PathBuf>,
    },
    /// Weigh a file; prints JSON
    Weigh {
        file: PathBuf,
    },
    /// Show the phase tags of a file and their compressed keys
    Tags {
        file: PathBuf,
    },
    /// Maintain the symbol map
    Symbols {
        #[command(subcommand)]
        action: commands::symbols::SymbolsCommands,
        #[arg(long, global = true)]
        map: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "phasesync=warn",
        1 => "phasesync=info",
        2 => "phasesync=debug",
        _ => "phasesync=trace",
    };
    phasesync_core::tracing::init_tracing_with_default(default_filter);

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Compress { text } => commands::swp::compress(&text),
        Commands::Word { token } => commands::swp::word(&token),
        Commands::Visualize { token } => commands::swp::visualize(&token),
        Commands::Phases { map } => commands::symbols::phases(map),
        Commands::Lookup { action, map } => commands::symbols::lookup(action, map),
        Commands::Weigh { file } => commands::file::weigh(&file),
        Commands::Tags { file } => commands::file::tags(&file),
        Commands::Symbols { action, map } => commands::symbols::symbols(action, map),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", error::render(&err));
            ExitCode::FAILURE
        }
    }
}
