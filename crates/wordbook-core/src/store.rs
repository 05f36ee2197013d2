//! JSON snapshot persistence for the dictionary.
//!
//! The dictionary is a single pretty-printed JSON object mapping word to
//! meaning. Every save rewrites the whole file; there is no incremental
//! format and no schema version. Writes go to a `.tmp` sibling first, then
//! rename over the target.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::dictionary::Dictionary;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The snapshot file exists but is not a valid word→meaning object.
    #[error("snapshot is not a valid dictionary: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whole-file snapshot store at a fixed path.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, returning an empty dictionary if the file
    /// doesn't exist.
    pub fn load(&self) -> Result<Dictionary, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(StoreError::Corrupt),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Dictionary::new()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, dict: &Dictionary) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(dict).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert("apple", "a fruit");
        dict.insert("run", "to move fast");
        dict
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("dictionary.json"));

        let dict = sample();
        store.save(&dict).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, dict);
    }

    #[test]
    fn load_missing_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("does_not_exist.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_corrupt_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, "not json at all").unwrap();

        let store = SnapshotStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn load_wrong_shape_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = SnapshotStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("nested/deep/dictionary.json"));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("dictionary.json"));

        store.save(&sample()).unwrap();
        let mut dict = sample();
        dict.remove("apple");
        store.save(&dict).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.get("apple").is_none());
    }

    #[test]
    fn snapshot_is_a_plain_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        let store = SnapshotStore::new(&path);
        store.save(&sample()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["apple"], "a fruit");
        assert_eq!(value["run"], "to move fast");
    }
}
