//! Word compression for single and compound tokens.

use super::letters::letter_value;
use super::reduce::digit_reduce;
use super::types::WordCompression;

/// Split a token on underscores and whitespace, dropping empty parts.
pub fn split_parts(token: &str) -> Vec<&str> {
    token
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Raw letter sum of one part.
#[inline]
pub(crate) fn part_sum(part: &str) -> u64 {
    part.chars().map(|c| u64::from(letter_value(c))).sum()
}

/// Compress a token into `(reduced, total)`.
///
/// A single part scores its raw letter sum. A compound token (`build_web_ui`,
/// `Core Feature Development`) reduces each part on its own first and sums
/// those digits, so each sub-word contributes a weight of at most 9.
///
/// ```
/// use phasesync_analysis::swp::compress_word;
///
/// let python = compress_word("Python");
/// assert_eq!((python.reduced, python.total), (8, 98));
/// ```
pub fn compress_word(token: &str) -> WordCompression {
    let parts = split_parts(token);
    match parts.as_slice() {
        [] => WordCompression::default(),
        [single] => {
            let total = part_sum(single);
            WordCompression {
                reduced: digit_reduce(total),
                total,
            }
        }
        many => {
            let total: u64 = many
                .iter()
                .map(|part| u64::from(digit_reduce(part_sum(part))))
                .sum();
            WordCompression {
                reduced: digit_reduce(total),
                total,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(token: &str) -> (u8, u64) {
        let r = compress_word(token);
        (r.reduced, r.total)
    }

    #[test]
    fn test_single_words() {
        assert_eq!(pair("Python"), (8, 98));
        assert_eq!(pair("Cursor"), (4, 94));
        assert_eq!(pair("Phase"), (4, 49));
        assert_eq!(pair("Sync"), (7, 61));
        assert_eq!(pair("architecture"), (5, 131));
        assert_eq!(pair("high"), (5, 32));
        assert_eq!(pair("logging"), (8, 71));
    }

    #[test]
    fn test_compound_words_reduce_parts_first() {
        // task = 51 → 6, management = 93 → 3
        assert_eq!(pair("task_management"), (9, 9));
        // build = 48 → 3, web = 30 → 3, ui = 30 → 3
        assert_eq!(pair("build_web_ui"), (9, 9));
        // unit = 64 → 1, testing = 94 → 4
        assert_eq!(pair("unit_testing"), (5, 5));
    }

    #[test]
    fn test_compound_total_above_nine_reduces_again() {
        // Core(41→5) + Feature(76→4) + Development(131→5) = 14 → 5
        assert_eq!(pair("Core Feature Development"), (5, 14));
    }

    #[test]
    fn test_space_and_underscore_are_equivalent() {
        assert_eq!(compress_word("build web ui"), compress_word("build_web_ui"));
        assert_eq!(compress_word("build__web \t ui"), compress_word("build_web_ui"));
    }

    #[test]
    fn test_leading_trailing_separators_form_single_part() {
        assert_eq!(compress_word("_Python_"), compress_word("Python"));
    }

    #[test]
    fn test_empty_and_whitespace_tokens() {
        assert_eq!(pair(""), (0, 0));
        assert_eq!(pair("   "), (0, 0));
        assert_eq!(pair("___"), (0, 0));
        assert_eq!(pair(" _\t_\n"), (0, 0));
    }

    #[test]
    fn test_tie_breaker_distinguishes_equal_weights() {
        let phase = compress_word("Phase");
        let cursor = compress_word("Cursor");
        assert_eq!(phase.reduced, cursor.reduced);
        assert_ne!(phase.total, cursor.total);
    }

    #[test]
    fn test_split_parts() {
        assert_eq!(split_parts("a_b c"), vec!["a", "b", "c"]);
        assert!(split_parts("").is_empty());
    }
}
