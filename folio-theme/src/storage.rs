//! # Durable Storage
//!
//! Theme state is persisted as three independent string entries in a
//! key/value store, the same model a browser's local storage offers.
//! [ThemeStorage] abstracts the store; [MemoryStorage] keeps entries for the
//! lifetime of the process and [FileStorage] keeps them in a JSON file.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};

/// A string key/value store.
pub trait ThemeStorage {
    /// Read an entry. `Ok(None)` means the key was never written.
    fn get_item(&self, key: &str) -> ThemeResult<Option<String>>;

    /// Write an entry.
    fn set_item(&mut self, key: &str, value: &str) -> ThemeResult<()>;

    /// Delete an entry. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> ThemeResult<()>;
}

impl<T: ThemeStorage + ?Sized> ThemeStorage for Box<T> {
    fn get_item(&self, key: &str) -> ThemeResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> ThemeResult<()> {
        (**self).remove_item(key)
    }
}

/// The keys theme state is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    /// Key of the active theme identifier.
    pub theme: String,
    /// Key of the seed color.
    pub custom_color: String,
    /// Key of the JSON custom palette.
    pub custom_theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "portfolio_theme".to_string(),
            custom_color: "portfolio_custom_color".to_string(),
            custom_theme: "portfolio_custom_theme".to_string(),
        }
    }
}

/// A process-lifetime store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with existing entries.
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: items.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ThemeStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> ThemeResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> ThemeResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// A store backed by a JSON object file.
///
/// The whole file is read on [open](FileStorage::open) and rewritten on every
/// change. Separate processes sharing a file race with last-write-wins.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open a store at `path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file also starts
    /// empty and is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(items) => {
                    log::info!("Loaded theme storage from: {:?}", path);
                    items
                },
                Err(e) => {
                    log::warn!("Ignoring corrupt theme storage {:?}: {}", path, e);
                    BTreeMap::new()
                },
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Failed to read theme storage {:?}: {}", path, e);
                BTreeMap::new()
            },
        };
        Self { path, items }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, key: &str) -> ThemeResult<()> {
        let content = serde_json::to_string_pretty(&self.items)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ThemeError::storage(key, e))?;
        }
        fs::write(&self.path, content).map_err(|e| ThemeError::storage(key, e))
    }
}

impl ThemeStorage for FileStorage {
    fn get_item(&self, key: &str) -> ThemeResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        let previous = self.items.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush(key) {
            // Keep memory in step with disk.
            match previous {
                Some(old) => self.items.insert(key.to_string(), old),
                None => self.items.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> ThemeResult<()> {
        if let Some(old) = self.items.remove(key) {
            if let Err(e) = self.flush(key) {
                self.items.insert(key.to_string(), old);
                return Err(e);
            }
        }
        Ok(())
    }
}
