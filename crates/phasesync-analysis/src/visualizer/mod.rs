//! Human-readable renderings of the SWP arithmetic.

pub mod report;
pub mod trace;

pub use report::visualize_phase_weights;
pub use trace::{CompressionTrace, LetterTrace, PartTrace};

/// Text shown instead of a trace when a token has nothing to compress.
pub const NO_LETTERS: &str = "No letters to compress";

/// Render the step-by-step compression of `token`.
///
/// Empty or separator-only tokens render as [`NO_LETTERS`].
pub fn visualize(token: &str) -> String {
    match CompressionTrace::build(token) {
        Some(trace) => trace.to_string(),
        None => NO_LETTERS.to_string(),
    }
}
