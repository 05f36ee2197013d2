pub mod dictionary;
pub mod store;

pub use dictionary::{normalize_word, Dictionary, DictionaryError, Wordbook};
pub use store::{SnapshotStore, StoreError};
