//! In-memory word→meaning dictionary and the `Wordbook` service that keeps
//! it synchronized with its on-disk snapshot.


use std::path::Path;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::store::{SnapshotStore, StoreError};

/// Canonical form of a word used as the lookup key: trimmed and lower-cased.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Word→meaning mapping. Keys are normalized and unique; iteration order is
/// alphabetical, so listings are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite. Returns the previous meaning, if any.
    pub fn insert(&mut self, word: &str, meaning: &str) -> Option<String> {
        self.entries
            .insert(normalize_word(word), meaning.trim().to_string())
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&normalize_word(word)).map(String::as_str)
    }

    /// Remove a word, returning its meaning if it was present.
    pub fn remove(&mut self, word: &str) -> Option<String> {
        self.entries.remove(&normalize_word(word))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, m)| (w.as_str(), m.as_str()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("'{0}' is not in the dictionary")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the dictionary and its store, and persists the full snapshot after
/// every mutation. Memory and disk never diverge past a single failed write.
pub struct Wordbook {
    dict: Dictionary,
    store: SnapshotStore,
}

impl Wordbook {
    /// Open from the snapshot at `path`, starting empty if none exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = SnapshotStore::new(path.as_ref());
        let dict = store.load()?;
        Ok(Self { dict, store })
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// Add a word, silently overwriting any existing meaning (last write
    /// wins). Returns the normalized word and stored meaning.
    pub fn add(&mut self, word: &str, meaning: &str) -> Result<(String, String), DictionaryError> {
        let word = normalize_word(word);
        let meaning = meaning.trim().to_string();
        self.dict.insert(&word, &meaning);
        self.store.save(&self.dict)?;
        debug!(%word, "added word");
        Ok((word, meaning))
    }

    pub fn lookup(&self, word: &str) -> Result<&str, DictionaryError> {
        self.dict
            .get(word)
            .ok_or_else(|| DictionaryError::NotFound(normalize_word(word)))
    }

    /// Replace the meaning of an existing word.
    pub fn edit(&mut self, word: &str, meaning: &str) -> Result<(), DictionaryError> {
        let word = normalize_word(word);
        if self.dict.get(&word).is_none() {
            return Err(DictionaryError::NotFound(word));
        }
        self.dict.insert(&word, meaning);
        self.store.save(&self.dict)?;
        debug!(%word, "edited meaning");
        Ok(())
    }

    /// Remove a word. Confirmation, if any, is the caller's concern; the
    /// wordbook deletes unconditionally.
    pub fn delete(&mut self, word: &str) -> Result<(), DictionaryError> {
        let word = normalize_word(word);
        self.dict
            .remove(&word)
            .ok_or_else(|| DictionaryError::NotFound(word.clone()))?;
        self.store.save(&self.dict)?;
        debug!(%word, "deleted word");
        Ok(())
    }

    /// All entries in alphabetical order; empty when the dictionary is empty.
    pub fn list(&self) -> Vec<(String, String)> {
        self.dict
            .iter()
            .map(|(w, m)| (w.to_string(), m.to_string()))
            .collect()
    }
}
