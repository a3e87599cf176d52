//! Configuration system for PhaseSync.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod phasesync_config;
pub mod report_config;
pub mod scan_config;
pub mod symbol_map_config;

pub use phasesync_config::{CliOverrides, PhaseSyncConfig};
pub use report_config::ReportConfig;
pub use scan_config::ScanConfig;
pub use symbol_map_config::SymbolMapConfig;
