//! Persistence for the language preference.
//!
//! The console keeps a single key-value entry in client-side storage. The
//! in-memory store serves tests and embedders that persist elsewhere; the
//! file store keeps a small JSON object on disk with last-write-wins
//! semantics.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tracing::debug;

/// Storage key holding the language tag.
pub const LANGUAGE_KEY: &str = "language";

/// File name used by [`FileStore::in_dir`].
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Errors raised while reading or writing preferences.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The preference file could not be read or written.
    #[error("failed to access preferences at {path}")]
    Io {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The preference file does not hold a JSON object of strings.
    #[error("preferences at {path} are not a JSON object of strings")]
    Format {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Scoped key-value storage for user preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Preferences held in process memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Preferences persisted as a JSON object in a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: Utf8PathBuf,
}

impl FileStore {
    /// Use the file at `path`.
    #[must_use]
    pub const fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }

    /// Use [`PREFERENCES_FILE`] inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILE))
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StoreError::Format { .. }) => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        entries.insert(key.to_owned(), value.to_owned());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        let text = serde_json::to_string_pretty(&entries).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(|err| self.io_error(err))?;
        debug!(path = %self.path, key, "saved preference");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp dir");
        FileStore::in_dir(&root.join("state"))
    }

    #[rstest]
    fn memory_store_last_write_wins() {
        let mut store = MemoryStore::new();
        store.save(LANGUAGE_KEY, "en").expect("save");
        store.save(LANGUAGE_KEY, "km").expect("save");
        assert_eq!(store.load(LANGUAGE_KEY).expect("load").as_deref(), Some("km"));
    }

    #[rstest]
    fn file_store_reads_missing_file_as_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir);
        assert_eq!(store.load(LANGUAGE_KEY).expect("load"), None);
    }

    #[rstest]
    fn file_store_round_trips_and_creates_parent() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = store_in(&dir);
        store.save(LANGUAGE_KEY, "km").expect("save");
        store.save("theme", "dark").expect("save");
        let reopened = FileStore::new(store.path().to_path_buf());
        assert_eq!(reopened.load(LANGUAGE_KEY).expect("load").as_deref(), Some("km"));
        assert_eq!(reopened.load("theme").expect("load").as_deref(), Some("dark"));
    }

    #[rstest]
    fn file_store_reports_corrupt_file_on_load_but_overwrites_on_save() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = store_in(&dir);
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), "not json").expect("write");
        assert!(matches!(store.load(LANGUAGE_KEY), Err(StoreError::Format { .. })));
        store.save(LANGUAGE_KEY, "en").expect("save over corrupt file");
        assert_eq!(store.load(LANGUAGE_KEY).expect("load").as_deref(), Some("en"));
    }
}
