//! Coded rendering of command errors.

use phasesync_core::errors::{ConfigError, PhaseSyncErrorCode, ScanError, SymbolMapError};

/// Code used for errors that did not come from a PhaseSync subsystem.
const CLI_ERROR: &str = "CLI_ERROR";

/// `[CODE] message` for `err`, using the subsystem code when there is one.
pub fn render(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<ScanError>() {
        return e.coded_string();
    }
    if let Some(e) = err.downcast_ref::<ConfigError>() {
        return e.coded_string();
    }
    if let Some(e) = err.downcast_ref::<SymbolMapError>() {
        return e.coded_string();
    }
    format!("[{CLI_ERROR}] {err:#}")
}
