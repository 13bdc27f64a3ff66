//! Persisted key-value slots.
//!
//! A slot holds the serialized bookmark list under a fixed key. The store
//! only ever reads it once at open and overwrites it after each mutation.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{BookmarkError, Result};

/// Key the bookmark list is stored under unless configured otherwise.
pub const DEFAULT_SLOT_KEY: &str = "bookmarks";

/// Key-value storage for serialized state.
pub trait Slot {
    /// Read the value stored under `key`, or `None` if nothing was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Slot backed by one JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File that holds the value for `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Slot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BookmarkError::Io(e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.is_dir() {
            return Err(BookmarkError::Storage(format!(
                "slot directory does not exist: {}",
                self.dir.display()
            )));
        }

        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp_path, &path)?;
        tracing::trace!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }
}

/// Slot held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slot = Self::new();
        slot.entries.insert(key.into(), value.into());
        slot
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Slot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
