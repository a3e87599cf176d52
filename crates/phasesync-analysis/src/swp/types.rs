//! SWP result types.

use serde::{Deserialize, Serialize};

/// Whole-text compression result.
///
/// `mass` and `total` always hold the same raw letter sum; both are kept so
/// text results line up with [`WordCompression`]'s `total` tie breaker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompressionResult {
    pub mass: u64,
    pub reduced: u8,
    pub total: u64,
}

/// Single-token or compound-token compression result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCompression {
    pub reduced: u8,
    /// Tie breaker: raw letter sum for a single token, sum of the per-part
    /// reduced digits for a compound token.
    pub total: u64,
}

impl From<(u8, u64)> for WordCompression {
    fn from((reduced, total): (u8, u64)) -> Self {
        Self { reduced, total }
    }
}

impl std::fmt::Display for WordCompression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reduced {}, total {}", self.reduced, self.total)
    }
}

impl std::fmt::Display for CompressionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mass {}, reduced {}, total {}",
            self.mass, self.reduced, self.total
        )
    }
}
