//! Symbol map configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SYMBOL_MAP_PATH;

/// Where the persisted weight→phase table lives.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SymbolMapConfig {
    /// Path to the symbol map JSON file. Default: `data/symbol_map.json`.
    pub path: Option<PathBuf>,
}

impl SymbolMapConfig {
    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SYMBOL_MAP_PATH))
    }
}
