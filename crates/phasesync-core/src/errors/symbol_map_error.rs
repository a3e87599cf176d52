//! Symbol map persistence errors.

use std::path::PathBuf;

use super::error_code::{self, PhaseSyncErrorCode};

/// Errors that can occur while loading or saving the weight→phase table.
#[derive(Debug, thiserror::Error)]
pub enum SymbolMapError {
    #[error("IO error on symbol map {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed symbol map {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Symbol map serialization failed: {message}")]
    Serialize { message: String },
}

impl PhaseSyncErrorCode for SymbolMapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => error_code::SYMBOL_MAP_PARSE,
            _ => error_code::SYMBOL_MAP_ERROR,
        }
    }
}
