//! Caller-owned, lazily loaded symbol map.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::map::SymbolMap;

/// Holds the symbol map for one table path.
///
/// The table is read on first access and reused afterwards; concurrent first
/// readers share a single load. Nothing invalidates it implicitly: call
/// [`SymbolMapStore::reload`] to re-read the file or
/// [`SymbolMapStore::replace`] to inject a map directly.
#[derive(Debug)]
pub struct SymbolMapStore {
    path: PathBuf,
    map: OnceLock<SymbolMap>,
}

impl SymbolMapStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            map: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached map, loading it (empty on failure) on first use.
    pub fn get(&self) -> &SymbolMap {
        self.map.get_or_init(|| SymbolMap::load_or_empty(&self.path))
    }

    pub fn is_loaded(&self) -> bool {
        self.map.get().is_some()
    }

    /// Drop the cached map and read the file again.
    pub fn reload(&mut self) -> &SymbolMap {
        self.map.take();
        self.get()
    }

    /// Replace the cached map without touching the file.
    pub fn replace(&mut self, map: SymbolMap) {
        self.map = OnceLock::from(map);
    }

    /// Persist the cached map back to the store's path.
    pub fn save(&self) -> Result<(), phasesync_core::errors::SymbolMapError> {
        self.get().save(&self.path)
    }

    pub fn phases_by_weight(&self, weight: &str) -> &[String] {
        self.get().phases_by_weight(weight)
    }

    pub fn weight_by_phase(&self, phase: &str) -> &str {
        self.get().weight_by_phase(phase)
    }

    pub fn weight_of(&self, phase: &str) -> Option<&str> {
        self.get().weight_of(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_load_and_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("symbol_map.json");
        std::fs::write(&path, r#"{"8": ["core"]}"#).unwrap();

        let mut store = SymbolMapStore::new(&path);
        assert!(!store.is_loaded());
        assert_eq!(store.weight_by_phase("core"), "8");
        assert!(store.is_loaded());

        // Cached: a changed file is not seen until reload.
        std::fs::write(&path, r#"{"5": ["core"]}"#).unwrap();
        assert_eq!(store.weight_by_phase("core"), "8");
        store.reload();
        assert_eq!(store.weight_by_phase("core"), "5");
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let store = SymbolMapStore::new("/definitely/not/here/symbol_map.json");
        assert!(store.get().is_empty());
        assert!(store.phases_by_weight("8").is_empty());
        assert_eq!(store.weight_by_phase("core"), "0");
    }

    #[test]
    fn test_replace_injects_map() {
        let mut store = SymbolMapStore::new("/unused.json");
        store.replace(SymbolMap::from_phases(["tests"]));
        assert_eq!(store.weight_of("tests"), Some("2"));
    }
}
