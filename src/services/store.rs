//! Client-side key-value persistence.
//!
//! Both the layout store and the theme engine persist through the [`Store`]
//! trait. [`FileStore`] keeps one file per key under a data directory;
//! [`MemoryStore`] is the in-process implementation used by tests and
//! ephemeral sessions.

use anyhow::{Context, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Key-value persistence, one logical record per key.
pub trait Store {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be removed.
    fn clear(&self, key: &str) -> Result<()>;
}

/// Outcome of a persistence write.
///
/// A failed write never rolls back the in-memory model; the caller gets the
/// reason so it can show a non-fatal warning.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum PersistStatus {
    /// The change was written
    Saved,
    /// The change lives only in memory for this session
    Unsaved(String),
}

impl PersistStatus {
    /// Converts a write result, logging failures.
    pub fn from_result(result: Result<()>, what: &str) -> Self {
        match result {
            Ok(()) => Self::Saved,
            Err(e) => {
                warn!("Failed to persist {what}: {e:#}");
                Self::Unsaved(format!("{what} will not survive a restart: {e:#}"))
            }
        }
    }

    /// True if the write succeeded.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// Keeps the first failure of two consecutive writes.
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Saved => other,
            unsaved @ Self::Unsaved(_) => unsaved,
        }
    }

    /// Warning text, if the write failed.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Saved => None,
            Self::Unsaved(reason) => Some(reason),
        }
    }
}

/// Validates a store key (lowercase, digits and hyphens only).
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        anyhow::bail!("Invalid store key '{key}': expected lowercase letters, digits and hyphens");
    }
    Ok(())
}

/// Store keeping one file per key in a directory.
///
/// Writes use the temp file + rename pattern so a record is never left
/// half-written.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the records.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Store for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context(format!("Failed to read store record: {}", path.display())),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.dir).context(format!(
            "Failed to create store directory: {}",
            self.dir.display()
        ))?;

        let temp_path = path.with_extension("json.tmp");

        // Write to temp file
        fs::write(&temp_path, value).context(format!(
            "Failed to write temp store record: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &path).context(format!(
            "Failed to rename temp store record to: {}",
            path.display()
        ))?;

        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(format!("Failed to remove store record: {}", path.display())),
        }
    }
}

/// In-memory store.
///
/// Can be switched read-only to simulate a full or disabled storage backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: Cell<bool>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write or clear fail (or succeed again).
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// True if a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_writable(&self) -> Result<()> {
        if self.read_only.get() {
            anyhow::bail!("Storage is read-only");
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
