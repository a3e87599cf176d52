//! PhaseSyncErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait PhaseSyncErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const FILE_TOO_LARGE: &str = "FILE_TOO_LARGE";
pub const ROOT_NOT_FOUND: &str = "ROOT_NOT_FOUND";
pub const SYMBOL_MAP_ERROR: &str = "SYMBOL_MAP_ERROR";
pub const SYMBOL_MAP_PARSE: &str = "SYMBOL_MAP_PARSE";
