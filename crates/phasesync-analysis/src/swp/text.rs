//! Whole-text compression.

use super::letters::letter_value;
use super::reduce::digit_reduce;
use super::types::CompressionResult;

/// Compress an arbitrary block of text.
///
/// Every character counts, word boundaries are ignored; whitespace and
/// punctuation contribute 0.
pub fn compress(text: &str) -> CompressionResult {
    let mass: u64 = text.chars().map(|c| u64::from(letter_value(c))).sum();
    CompressionResult {
        mass,
        reduced: digit_reduce(mass),
        total: mass,
    }
}
