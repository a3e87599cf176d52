//! Tag kinds and the per-file tag set.

use phasesync_core::types::SmallVec3;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// The three annotation kinds recognized in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Phase,
    Task,
    Weight,
}

impl TagKind {
    /// All kinds, in marker priority order.
    pub const ALL: [TagKind; 3] = [TagKind::Phase, TagKind::Task, TagKind::Weight];

    /// Lowercase name, also used as the compressed-map key prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Phase => "phase",
            TagKind::Task => "task",
            TagKind::Weight => "weight",
        }
    }

    /// The annotation marker, e.g. `@phase:`.
    pub const fn marker(self) -> &'static str {
        match self {
            TagKind::Phase => "@phase:",
            TagKind::Task => "@task:",
            TagKind::Weight => "@weight:",
        }
    }

    pub fn from_name(name: &str) -> Option<TagKind> {
        match name {
            "phase" => Some(TagKind::Phase),
            "task" => Some(TagKind::Task),
            "weight" => Some(TagKind::Weight),
            _ => None,
        }
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags found in one text, at most one value per kind.
///
/// Keeps first-insertion order; overwriting a kind replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    entries: SmallVec3<(TagKind, String)>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `kind` to `value`, returning the previous value if any.
    pub fn insert(&mut self, kind: TagKind, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((kind, value));
                None
            }
        }
    }

    pub fn get(&self, kind: TagKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, kind: TagKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(kind, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TagKind, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(TagKind, String)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (TagKind, String)>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for (kind, value) in iter {
            set.insert(kind, value);
        }
        set
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, value) in &self.entries {
            map.serialize_entry(kind.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut tags = TagSet::new();
        tags.insert(TagKind::Task, "first");
        tags.insert(TagKind::Phase, "core");
        let previous = tags.insert(TagKind::Task, "second");

        assert_eq!(previous.as_deref(), Some("first"));
        let order: Vec<_> = tags.iter().collect();
        assert_eq!(order, vec![(TagKind::Task, "second"), (TagKind::Phase, "core")]);
    }

    #[test]
    fn test_serializes_as_object() {
        let tags: TagSet = [
            (TagKind::Phase, "core".to_string()),
            (TagKind::Weight, "high".to_string()),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"{"phase":"core","weight":"high"}"#);
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in TagKind::ALL {
            assert_eq!(TagKind::from_name(kind.as_str()), Some(kind));
            assert!(kind.marker().starts_with('@'));
            assert!(kind.marker().ends_with(':'));
        }
        assert_eq!(TagKind::from_name("owner"), None);
    }
}
