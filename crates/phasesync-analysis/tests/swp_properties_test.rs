use phasesync_analysis::swp::{compress, compress_word, digit_reduce};
use proptest::prelude::*;

proptest! {
    #[test]
    fn reduce_is_single_digit(n in any::<u64>()) {
        prop_assert!(digit_reduce(n) <= 9);
    }

    #[test]
    fn reduce_is_idempotent(n in any::<u64>()) {
        let once = digit_reduce(n);
        prop_assert_eq!(digit_reduce(u64::from(once)), once);
    }

    #[test]
    fn reduce_is_digital_root(n in 1u64..u64::MAX) {
        let expected = match n % 9 {
            0 => 9,
            r => r as u8,
        };
        prop_assert_eq!(digit_reduce(n), expected);
    }

    #[test]
    fn text_reduced_matches_mass(s in ".{0,200}") {
        let result = compress(&s);
        prop_assert_eq!(result.mass, result.total);
        prop_assert_eq!(result.reduced, digit_reduce(result.mass));
    }

    #[test]
    fn text_mass_is_additive(a in ".{0,100}", b in ".{0,100}") {
        let combined = format!("{}{}", a, b);
        prop_assert_eq!(compress(&combined).mass, compress(&a).mass + compress(&b).mass);
    }

    #[test]
    fn plain_word_matches_text(s in "[A-Za-z]{1,40}") {
        let word = compress_word(&s);
        let text = compress(&s);
        prop_assert_eq!(word.total, text.mass);
        prop_assert_eq!(word.reduced, text.reduced);
    }

    #[test]
    fn word_ignores_ascii_case(s in "[a-z_ ]{0,40}") {
        prop_assert_eq!(compress_word(&s), compress_word(&s.to_uppercase()));
    }

    #[test]
    fn compound_total_is_small(parts in prop::collection::vec("[a-z]{1,12}", 2..6)) {
        let token = parts.join("_");
        let word = compress_word(&token);
        // Each part contributes a single digit.
        prop_assert!(word.total <= 9 * parts.len() as u64);
        prop_assert_eq!(word.reduced, digit_reduce(word.total));
    }
}
