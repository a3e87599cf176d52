//! Phase bucket selection for a single file.

use super::types::PhaseBucket;
use crate::tags::{TagKind, TagSet};

/// Path fragments checked, in order, when a file carries no `@phase:` tag.
const PATH_HINTS: [PhaseBucket; 3] = [PhaseBucket::Core, PhaseBucket::Utils, PhaseBucket::Tests];

/// Pick the bucket for a file.
///
/// An `@phase:` tag decides when present: `core`, `utils` or `tests`
/// (case-insensitive) select that bucket, anything else goes to `Other`.
/// Without a tag, the first of `core`, `utils`, `tests` appearing anywhere
/// in the relative path selects the bucket.
pub fn categorize(rel_path: &str, tags: &TagSet) -> PhaseBucket {
    if let Some(phase) = tags.get(TagKind::Phase) {
        return match PhaseBucket::from_name(&phase.to_lowercase()) {
            Some(bucket) if bucket != PhaseBucket::Other => bucket,
            _ => PhaseBucket::Other,
        };
    }
    PATH_HINTS
        .into_iter()
        .find(|bucket| rel_path.contains(bucket.as_str()))
        .unwrap_or(PhaseBucket::Other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::extract_tags;

    #[test]
    fn test_phase_tag_wins_over_path() {
        let tags = extract_tags("# @phase:Utils");
        assert_eq!(categorize("src/core/app.py", &tags), PhaseBucket::Utils);
    }

    #[test]
    fn test_unknown_phase_tag_goes_to_other() {
        let tags = extract_tags("# @phase:architecture");
        assert_eq!(categorize("src/core/app.py", &tags), PhaseBucket::Other);
    }

    #[test]
    fn test_path_fallback_order() {
        let none = TagSet::new();
        assert_eq!(categorize("src/core/task_manager.py", &none), PhaseBucket::Core);
        assert_eq!(categorize("src/utils/logger.py", &none), PhaseBucket::Utils);
        assert_eq!(categorize("tests/test_task_manager.py", &none), PhaseBucket::Tests);
        // core is checked before tests
        assert_eq!(categorize("tests/core_test.py", &none), PhaseBucket::Core);
        assert_eq!(categorize("main.py", &none), PhaseBucket::Other);
    }

    #[test]
    fn test_path_match_is_substring() {
        let none = TagSet::new();
        assert_eq!(categorize("hardcore.py", &none), PhaseBucket::Core);
    }
}
