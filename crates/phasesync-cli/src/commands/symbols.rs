//! `phasesync phases`, `lookup` and `symbols`: the weight→phase table.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Subcommand;
use phasesync_analysis::{visualize_phase_weights, SymbolMap, SymbolMapStore};

#[derive(Subcommand)]
pub enum LookupCommands {
    /// Phases filed under a weight digit
    Weight { weight: String },
    /// Weight a phase is filed under ("0" when unknown)
    Phase { name: String },
}

#[derive(Subcommand)]
pub enum SymbolsCommands {
    /// File phases under their computed weights
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// List phases whose listed weight disagrees with the computed one
    Check,
}

pub fn phases(map: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let store = SymbolMapStore::new(super::symbol_map_path(map)?);
    tracing::debug!(path = %store.path().display(), "rendering phase weights");
    println!("{}", visualize_phase_weights(store.get()));
    Ok(ExitCode::SUCCESS)
}

pub fn lookup(action: LookupCommands, map: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let store = SymbolMapStore::new(super::symbol_map_path(map)?);
    tracing::debug!(path = %store.path().display(), "symbol map lookup");
    match action {
        LookupCommands::Weight { weight } => {
            let phases = store.phases_by_weight(&weight);
            if phases.is_empty() {
                println!("No phases for weight {weight}");
            }
            for phase in phases {
                println!("{phase}");
            }
        }
        LookupCommands::Phase { name } => println!("{}", store.weight_by_phase(&name)),
    }
    Ok(ExitCode::SUCCESS)
}

pub fn symbols(action: SymbolsCommands, map: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let path = super::symbol_map_path(map)?;
    match action {
        SymbolsCommands::Add { names } => {
            // A missing table starts empty; an unreadable one is an error.
            let mut table = if path.exists() {
                SymbolMap::load(&path)?
            } else {
                SymbolMap::new()
            };
            for name in &names {
                let weight = table.insert_phase(name);
                println!("{name}: weight {} (total {})", weight.reduced, weight.total);
            }
            table.save(&path)?;
            Ok(ExitCode::SUCCESS)
        }
        SymbolsCommands::Check => {
            let table = SymbolMap::load(&path)?;
            let mismatches = table.mismatches();
            if mismatches.is_empty() {
                println!("All {} phases match their computed weights", table.phase_count());
                return Ok(ExitCode::SUCCESS);
            }
            for m in &mismatches {
                println!(
                    "{}: listed under {}, computes to {} (total {})",
                    m.phase, m.listed, m.computed.reduced, m.computed.total
                );
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
