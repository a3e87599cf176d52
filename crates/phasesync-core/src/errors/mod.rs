//! Error handling for PhaseSync.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod scan_error;
pub mod symbol_map_error;

pub use config_error::ConfigError;
pub use error_code::PhaseSyncErrorCode;
pub use scan_error::ScanError;
pub use symbol_map_error::SymbolMapError;
