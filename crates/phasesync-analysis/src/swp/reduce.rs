//! Digit reduction: repeated decimal digit sums down to a single digit.

use serde::{Deserialize, Serialize};

/// One round of digit summing, e.g. `98 → [9, 8] → 17`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionStep {
    pub digits: Vec<u8>,
    pub sum: u64,
}

/// Sum of the base-10 digits of `n`.
#[inline]
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit (0-9) by summing its digits until it drops below 10.
///
/// `digit_reduce(0) == 0`; every other input lands in `1..=9`.
pub fn digit_reduce(mut n: u64) -> u8 {
    while n >= 10 {
        n = digit_sum(n);
    }
    n as u8
}

/// Every intermediate step taken by [`digit_reduce`], most significant digit first.
///
/// Empty when `n` is already a single digit.
pub fn reduction_steps(mut n: u64) -> Vec<ReductionStep> {
    let mut steps = Vec::new();
    while n >= 10 {
        let digits: Vec<u8> = n.to_string().bytes().map(|b| b - b'0').collect();
        let sum = digits.iter().map(|&d| u64::from(d)).sum();
        steps.push(ReductionStep { digits, sum });
        n = sum;
    }
    steps
}
