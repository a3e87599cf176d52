//! Line-oriented tag extraction.

use super::types::{TagKind, TagSet};

/// Markers checked on every line, in priority order. The first one present
/// on a line claims that line.
pub const TAG_MARKERS: [(&str, TagKind); 3] = [
    (TagKind::Phase.marker(), TagKind::Phase),
    (TagKind::Task.marker(), TagKind::Task),
    (TagKind::Weight.marker(), TagKind::Weight),
];

/// Extract `@phase:`, `@task:` and `@weight:` annotations from `content`.
///
/// The value is the rest of the line after the marker, trimmed; it may be
/// empty. When a kind appears on several lines the last one wins.
pub fn extract_tags(content: &str) -> TagSet {
    let mut tags = TagSet::new();
    for line in content.lines() {
        let line = line.trim();
        for (marker, kind) in TAG_MARKERS {
            if let Some((_, value)) = line.split_once(marker) {
                tags.insert(kind, value.trim());
                break;
            }
        }
    }
    tags
}
