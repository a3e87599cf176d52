//! Subcommand handlers. Each returns the process exit code.

pub mod analyze;
pub mod file;
pub mod swp;
pub mod symbols;

use std::path::{Path, PathBuf};

use phasesync_core::config::{CliOverrides, PhaseSyncConfig};

/// Resolve configuration for a command run from `root`.
pub(crate) fn load_config(root: &Path, overrides: &CliOverrides) -> anyhow::Result<PhaseSyncConfig> {
    let config = PhaseSyncConfig::load(root, Some(overrides))?;
    tracing::debug!(root = %root.display(), "configuration resolved");
    Ok(config)
}

/// Symbol map path: `--map` if given, otherwise from configuration.
pub(crate) fn symbol_map_path(map: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let overrides = CliOverrides {
        symbol_map_path: map,
        ..Default::default()
    };
    let config = load_config(Path::new("."), &overrides)?;
    Ok(config.symbol_map.effective_path())
}
