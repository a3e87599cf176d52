//! The weight→phase-names table.
//!
//! On disk the table is a JSON object keyed by weight digit. Each bucket is
//! either a list of phase names or a list of `[name, extra]` pairs; pairs are
//! collapsed to their names on load. Buckets keep the order they appear in
//! the file.

use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use phasesync_core::constants::UNKNOWN_WEIGHT;
use phasesync_core::errors::SymbolMapError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tempfile::NamedTempFile;

use crate::swp::{compress_word, WordCompression};

/// One bucket entry as it may appear on disk.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Name(String),
    Pair(String, serde_json::Value),
}

impl RawEntry {
    fn into_name(self) -> String {
        match self {
            RawEntry::Name(name) | RawEntry::Pair(name, _) => name,
        }
    }
}

/// A phase whose listed weight disagrees with its computed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightMismatch {
    pub phase: String,
    pub listed: String,
    pub computed: WordCompression,
}

/// Weight string → ordered phase names.
///
/// Buckets iterate in file order (insertion order for new buckets), so a
/// phase listed under several weights resolves to the one appearing first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMap {
    weights: Vec<(String, Vec<String>)>,
}

impl Serialize for SymbolMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.weights.len()))?;
        for (weight, phases) in &self.weights {
            map.serialize_entry(weight, phases)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SymbolMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SymbolMapVisitor)
    }
}

struct SymbolMapVisitor;

impl<'de> Visitor<'de> for SymbolMapVisitor {
    type Value = SymbolMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping weights to lists of phase names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SymbolMap, A::Error> {
        let mut map = SymbolMap::new();
        while let Some((weight, entries)) = access.next_entry::<String, Vec<RawEntry>>()? {
            let names: Vec<String> = entries.into_iter().map(RawEntry::into_name).collect();
            // Repeated keys: the later list replaces the earlier one in place.
            match map.bucket_mut(&weight) {
                Some(phases) => *phases = names,
                None => map.weights.push((weight, names)),
            }
        }
        Ok(map)
    }
}

impl SymbolMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map by computing the weight of every name.
    pub fn from_phases<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for name in names {
            map.insert_phase(name.as_ref());
        }
        map
    }

    /// Parse the JSON table.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn bucket_mut(&mut self, weight: &str) -> Option<&mut Vec<String>> {
        self.weights
            .iter_mut()
            .find(|(w, _)| w == weight)
            .map(|(_, phases)| phases)
    }

    /// Read and parse the table at `path`.
    pub fn load(path: &Path) -> Result<Self, SymbolMapError> {
        let content = fs::read_to_string(path).map_err(|source| SymbolMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::from_json_str(&content).map_err(|e| SymbolMapError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(
            path = %path.display(),
            weights = map.weights.len(),
            phases = map.phase_count(),
            "loaded symbol map"
        );
        Ok(map)
    }

    /// Like [`SymbolMap::load`], but any failure yields an empty map.
    ///
    /// The failure is logged at `warn` so reports keep rendering.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "symbol map unavailable, using empty map");
            Self::default()
        })
    }

    /// Write the table to `path` atomically (temp file in the same directory, then rename).
    pub fn save(&self, path: &Path) -> Result<(), SymbolMapError> {
        let io_err = |source| SymbolMapError::Io {
            path: path.to_path_buf(),
            source,
        };
        let parent_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir).map_err(io_err)?;

        let temp_file = NamedTempFile::new_in(parent_dir).map_err(io_err)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, self).map_err(|e| {
                SymbolMapError::Serialize {
                    message: e.to_string(),
                }
            })?;
            writer.write_all(b"\n").map_err(io_err)?;
            writer.flush().map_err(io_err)?;
        }
        temp_file.persist(path).map_err(|e| io_err(e.error))?;

        tracing::info!(path = %path.display(), phases = self.phase_count(), "saved symbol map");
        Ok(())
    }

    /// Phase names filed under `weight`, empty when the bucket is absent.
    pub fn phases_by_weight(&self, weight: &str) -> &[String] {
        self.weights
            .iter()
            .find(|(w, _)| w == weight)
            .map(|(_, phases)| phases.as_slice())
            .unwrap_or(&[])
    }

    /// First weight (file order) whose bucket lists `phase`.
    /// Exact, case-sensitive match.
    pub fn weight_of(&self, phase: &str) -> Option<&str> {
        self.weights
            .iter()
            .find(|(_, phases)| phases.iter().any(|p| p == phase))
            .map(|(weight, _)| weight.as_str())
    }

    /// Weight of `phase`, or `"0"` when it is not listed.
    ///
    /// `"0"` is also a legitimate weight; use [`SymbolMap::weight_of`] to tell
    /// the two apart.
    pub fn weight_by_phase(&self, phase: &str) -> &str {
        self.weight_of(phase).unwrap_or(UNKNOWN_WEIGHT)
    }

    /// File `name` under its computed weight unless it is already listed
    /// anywhere. Returns the computed weight either way.
    pub fn insert_phase(&mut self, name: &str) -> WordCompression {
        let weight = compress_word(name);
        if self.weight_of(name).is_none() {
            let key = weight.reduced.to_string();
            match self.bucket_mut(&key) {
                Some(phases) => phases.push(name.to_string()),
                None => self.weights.push((key, vec![name.to_string()])),
            }
        }
        weight
    }

    /// Remove `name` from every bucket, dropping buckets that become empty.
    pub fn remove_phase(&mut self, name: &str) -> bool {
        let mut removed = false;
        self.weights.retain_mut(|(_, phases)| {
            let before = phases.len();
            phases.retain(|p| p != name);
            removed |= phases.len() != before;
            !phases.is_empty()
        });
        removed
    }

    /// Phases whose bucket key differs from their computed reduced weight.
    pub fn mismatches(&self) -> Vec<WeightMismatch> {
        self.iter()
            .flat_map(|(weight, phases)| {
                phases.iter().filter_map(move |phase| {
                    let computed = compress_word(phase);
                    (computed.reduced.to_string() != weight).then(|| WeightMismatch {
                        phase: phase.clone(),
                        listed: weight.to_string(),
                        computed,
                    })
                })
            })
            .collect()
    }

    /// `(weight, phases)` in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.weights
            .iter()
            .map(|(weight, phases)| (weight.as_str(), phases.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of weight buckets.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Number of phase names across all buckets.
    pub fn phase_count(&self) -> usize {
        self.weights.iter().map(|(_, phases)| phases.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SymbolMap {
        SymbolMap::from_json_str(r#"{"8": ["core", "backend"], "4": ["utils", "frontend"], "9": ["tests", "docs"]}"#)
            .unwrap()
    }

    #[test]
    fn test_lookup_by_weight() {
        let map = sample();
        assert_eq!(map.phases_by_weight("8"), ["core", "backend"]);
        assert!(map.phases_by_weight("1").is_empty());
    }

    #[test]
    fn test_lookup_by_phase() {
        let map = sample();
        assert_eq!(map.weight_by_phase("core"), "8");
        assert_eq!(map.weight_by_phase("docs"), "9");
        assert_eq!(map.weight_by_phase("nonexistent"), "0");
        assert_eq!(map.weight_of("nonexistent"), None);
        assert_eq!(map.weight_by_phase("Core"), "0");
    }

    #[test]
    fn test_pairs_collapse_to_names() {
        let map = SymbolMap::from_json_str(
            r#"{"8": [["core", 35], ["backend", {"note": "api"}]], "2": ["tests"]}"#,
        )
        .unwrap();
        assert_eq!(map.phases_by_weight("8"), ["core", "backend"]);
        assert_eq!(map.phases_by_weight("2"), ["tests"]);
    }

    #[test]
    fn test_malformed_shapes_fail_to_parse() {
        assert!(SymbolMap::from_json_str("[1, 2, 3]").is_err());
        assert!(SymbolMap::from_json_str(r#"{"8": "core"}"#).is_err());
        assert!(SymbolMap::from_json_str(r#"{"8": [42]}"#).is_err());
        assert!(SymbolMap::from_json_str("not json").is_err());
    }

    #[test]
    fn test_first_bucket_in_file_order_wins() {
        let map = SymbolMap::from_json_str(r#"{"7": ["shared"], "3": ["shared"]}"#).unwrap();
        assert_eq!(map.weight_by_phase("shared"), "7");
        assert_eq!(map.weight_of("shared"), Some("7"));

        let keys: Vec<&str> = map.iter().map(|(w, _)| w).collect();
        assert_eq!(keys, ["7", "3"]);
    }

    #[test]
    fn test_repeated_key_replaces_in_place() {
        let map = SymbolMap::from_json_str(r#"{"7": ["a"], "3": ["b"], "7": ["c"]}"#).unwrap();
        let keys: Vec<&str> = map.iter().map(|(w, _)| w).collect();
        assert_eq!(keys, ["7", "3"]);
        assert_eq!(map.phases_by_weight("7"), ["c"]);
    }

    #[test]
    fn test_file_order_survives_save() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("symbol_map.json");
        let map = SymbolMap::from_json_str(r#"{"9": ["utils"], "2": ["tests"]}"#).unwrap();
        map.save(&path).unwrap();

        let loaded = SymbolMap::load(&path).unwrap();
        assert_eq!(loaded, map);
        let keys: Vec<&str> = loaded.iter().map(|(w, _)| w).collect();
        assert_eq!(keys, ["9", "2"]);
    }

    #[test]
    fn test_insert_phase_uses_computed_weight() {
        let mut map = SymbolMap::new();
        let weight = map.insert_phase("Python");
        assert_eq!(weight.reduced, 8);
        assert_eq!(map.phases_by_weight("8"), ["Python"]);

        // Already listed: not filed twice.
        map.insert_phase("Python");
        assert_eq!(map.phase_count(), 1);
    }

    #[test]
    fn test_remove_phase_drops_empty_bucket() {
        let mut map = sample();
        assert!(map.remove_phase("tests"));
        assert!(map.remove_phase("docs"));
        assert!(map.phases_by_weight("9").is_empty());
        assert_eq!(map.len(), 2);
        assert!(!map.remove_phase("docs"));
    }

    #[test]
    fn test_mismatches() {
        // core computes to 5, utils to 9.
        let map = sample();
        let mismatched: Vec<_> = map.mismatches().into_iter().map(|m| m.phase).collect();
        assert!(mismatched.contains(&"core".to_string()));
        assert!(mismatched.contains(&"utils".to_string()));

        let consistent = SymbolMap::from_phases(["core", "utils", "tests"]);
        assert!(consistent.mismatches().is_empty());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let map = SymbolMap::from_phases(["tests"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"2":["tests"]}"#);
    }
}
