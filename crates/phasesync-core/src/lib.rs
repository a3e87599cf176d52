//! phasesync-core: shared foundation for the PhaseSync workspace.
//!
//! - Constants: defaults, env var names, file names
//! - Errors: one `thiserror` enum per subsystem plus error codes
//! - Config: TOML-based, layered resolution
//! - Tracing: `EnvFilter`-driven subscriber setup
//! - Types: collection aliases shared across crates

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::PhaseSyncConfig;
pub use errors::{ConfigError, PhaseSyncErrorCode, ScanError, SymbolMapError};
