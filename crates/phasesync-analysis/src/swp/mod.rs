//! Symbolic Weight Protocol (SWP).
//!
//! Text is compressed to a single digit by summing letter values (A=1..Z=26)
//! and repeatedly summing the decimal digits of the result. The pre-reduction
//! sum is kept alongside the digit as a tie breaker between texts that land on
//! the same weight.
//!
//! ```text
//! "Python" → P(16) + Y(25) + T(20) + H(8) + O(15) + N(14) = 98
//! 98 → 9 + 8 = 17 → 1 + 7 = 8
//! ```

pub mod letters;
pub mod reduce;
pub mod text;
pub mod types;
pub mod word;

pub use letters::{letter_value, letter_values};
pub use reduce::{digit_reduce, digit_sum, reduction_steps, ReductionStep};
pub use text::compress;
pub use types::{CompressionResult, WordCompression};
pub use word::{compress_word, split_parts};
