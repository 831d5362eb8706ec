//! Bounded word store
//!
//! Holds every word loaded during a session. Loads stop at the capacity and
//! report how many tokens were dropped instead of truncating silently.

use super::loader::{parse_words, read_source};
use crate::core::Word;
use log::{debug, info, warn};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Maximum number of words held at once, across all loads
pub const DEFAULT_CAPACITY: usize = 200;

/// Errors raised by the word store
#[derive(Debug)]
pub enum StoreError {
    /// The dictionary file could not be opened or read
    NoSource { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSource { path, source } => {
                write!(f, "Cannot read dictionary {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoSource { source, .. } => Some(source),
        }
    }
}

/// Outcome of a successful load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Words added to the store
    pub added: usize,
    /// Valid words left out because the store reached its capacity
    pub dropped: usize,
    /// Tokens that were not valid words
    pub skipped: usize,
}

impl LoadReport {
    /// Whether the load hit the capacity bound
    #[must_use]
    pub const fn capacity_exceeded(&self) -> bool {
        self.dropped > 0
    }
}

/// Ordered, capacity-bounded collection of words
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<Word>,
    capacity: usize,
}

impl Default for WordStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl WordStore {
    /// Create an empty store with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Room left before the store is full
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.words.len())
    }

    /// Load a dictionary file, replacing every entry from `start_offset` on
    ///
    /// An offset past the end behaves like `append`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoSource` if the file cannot be read. The store is
    /// left untouched in that case.
    pub fn load<P: AsRef<Path>>(
        &mut self,
        path: P,
        start_offset: usize,
    ) -> Result<LoadReport, StoreError> {
        let path = path.as_ref();
        let content = read_source(path).map_err(|source| {
            warn!("Dictionary {} unavailable: {source}", path.display());
            StoreError::NoSource {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let report = self.load_str(&content, start_offset);
        info!(
            "Loaded {} words from {} ({} in store)",
            report.added,
            path.display(),
            self.len()
        );
        Ok(report)
    }

    /// Load a dictionary file after the existing entries
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoSource` if the file cannot be read.
    pub fn append<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport, StoreError> {
        let offset = self.len();
        self.load(path, offset)
    }

    /// Load dictionary text that is already in memory
    pub fn load_str(&mut self, content: &str, start_offset: usize) -> LoadReport {
        let (parsed, skipped) = parse_words(content);

        self.words.truncate(start_offset);
        let room = self.remaining();
        let added = parsed.len().min(room);
        let dropped = parsed.len() - added;

        self.words.extend(parsed.into_iter().take(added));

        if dropped > 0 {
            warn!(
                "Word store full at {} words, dropped {dropped} more",
                self.capacity
            );
        }
        debug!("load_str: added={added} dropped={dropped} skipped={skipped}");

        LoadReport {
            added,
            dropped,
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn texts(store: &WordStore) -> Vec<&str> {
        store.words().iter().map(Word::text).collect()
    }

    fn temp_dictionary(name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "unscramble-store-{name}-{}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_str_from_empty_store() {
        let mut store = WordStore::new();
        let report = store.load_str("cat house dog", 0);

        assert_eq!(report.added, 3);
        assert!(!report.capacity_exceeded());
        assert_eq!(texts(&store), vec!["cat", "house", "dog"]);
    }

    #[test]
    fn append_keeps_existing_entries() {
        let mut store = WordStore::new();
        store.load_str("cat dog", 0);
        let report = store.load_str("garden", store.len());

        assert_eq!(report.added, 1);
        assert_eq!(texts(&store), vec!["cat", "dog", "garden"]);
    }

    #[test]
    fn load_at_offset_replaces_tail() {
        let mut store = WordStore::new();
        store.load_str("cat dog pig", 0);
        store.load_str("garden", 1);

        assert_eq!(texts(&store), vec!["cat", "garden"]);
    }

    #[test]
    fn capacity_stops_loading_and_reports_drop() {
        let mut store = WordStore::with_capacity(3);
        let report = store.load_str("one two six ten", 0);

        assert_eq!(report.added, 3);
        assert_eq!(report.dropped, 1);
        assert!(report.capacity_exceeded());
        assert_eq!(store.len(), 3);

        let report = store.load_str("more words", store.len());
        assert_eq!(report.added, 0);
        assert_eq!(report.dropped, 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn capacity_is_shared_across_loads() {
        let mut store = WordStore::new();
        let first: Vec<String> = (0..150).map(|i| format!("word{i}")).collect();
        let second: Vec<String> = (0..100).map(|i| format!("more{i}")).collect();

        store.load_str(&first.join(" "), 0);
        let report = store.load_str(&second.join("\n"), store.len());

        assert_eq!(report.added, 50);
        assert_eq!(report.dropped, 50);
        assert_eq!(store.len(), DEFAULT_CAPACITY);
    }

    #[test]
    fn invalid_utf8_token_is_skipped_not_fatal() {
        let path = temp_dictionary("latin1", b"cat house caf\xe9 dog".as_slice());

        let mut store = WordStore::new();
        let report = store.load(&path, 0).unwrap();

        assert_eq!(report.added, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(texts(&store), vec!["cat", "house", "dog"]);

        fs::remove_file(path).ok();
    }

    #[test]
    fn load_file_and_append_file() {
        let first = temp_dictionary("first", "cat\nhouse\ndog\n");
        let second = temp_dictionary("second", "adventure elephant");

        let mut store = WordStore::new();
        let report = store.load(&first, 0).unwrap();
        assert_eq!(report.added, 3);

        let report = store.append(&second).unwrap();
        assert_eq!(report.added, 2);
        assert_eq!(
            texts(&store),
            vec!["cat", "house", "dog", "adventure", "elephant"]
        );

        fs::remove_file(first).ok();
        fs::remove_file(second).ok();
    }

    #[test]
    fn missing_file_leaves_store_unchanged() {
        let mut store = WordStore::new();
        store.load_str("cat house dog", 0);

        let missing = std::env::temp_dir().join("unscramble-store-does-not-exist.txt");
        let err = store.append(&missing).unwrap_err();

        assert!(matches!(err, StoreError::NoSource { .. }));
        assert!(err.to_string().contains("does-not-exist"));
        assert_eq!(texts(&store), vec!["cat", "house", "dog"]);

        let err = store.load(&missing, 0).unwrap_err();
        assert!(matches!(err, StoreError::NoSource { .. }));
        assert_eq!(store.len(), 3);
    }
}
