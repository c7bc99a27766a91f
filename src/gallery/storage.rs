// Flat string key-value stores and the typed like-flag facade on top of them.
// The UI treats the store as always available: backends log their own I/O failures.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::card::CardId;
use super::error::StoreError;

pub const DEFAULT_NAMESPACE: &str = "card";

pub trait KeyValueStore: Send {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// JSON object file, rewritten in full after every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(data) if data.trim().is_empty() => BTreeMap::new(),
            Ok(data) => serde_json::from_str(&data).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        log::info!(
            "Opened like store {} ({} entries)",
            path.to_string_lossy(),
            items.len()
        );
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(&self.items).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, data).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            log::error!("Failed to write like store: {e}");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove_item(&mut self, key: &str) {
        if self.items.remove(key).is_some() {
            self.persist();
        }
    }
}

/// Typed get/set/remove of per-card like flags over a namespaced key-value store.
/// Keys look like `{namespace}-{id}-liked`, values are `"true"` / `"false"`.
pub struct LikeStore {
    backend: Box<dyn KeyValueStore>,
    namespace: String,
}

impl LikeStore {
    pub fn new(backend: Box<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), DEFAULT_NAMESPACE)
    }

    pub fn key_for(&self, id: &CardId) -> String {
        format!("{}-{}-liked", self.namespace, id)
    }

    pub fn get(&self, id: &CardId) -> Option<bool> {
        let raw = self.raw(id)?;
        match serde_json::from_str::<bool>(raw.trim()) {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!("Ignoring unreadable like flag {}={raw:?}", self.key_for(id));
                None
            }
        }
    }

    pub fn set(&mut self, id: &CardId, liked: bool) {
        let key = self.key_for(id);
        self.backend.set_item(&key, if liked { "true" } else { "false" });
    }

    pub fn remove(&mut self, id: &CardId) {
        let key = self.key_for(id);
        self.backend.remove_item(&key);
    }

    /// Persisted flag if present, otherwise `default`.
    pub fn resolve(&self, id: &CardId, default: bool) -> bool {
        self.get(id).unwrap_or(default)
    }

    pub fn raw(&self, id: &CardId) -> Option<String> {
        self.backend.get_item(&self.key_for(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_card_layout() {
        let store = LikeStore::in_memory();
        assert_eq!(store.key_for(&CardId::new("42")), "card-42-liked");
    }

    #[test]
    fn flags_are_stored_as_text() {
        let mut store = LikeStore::in_memory();
        let id = CardId::new("1");
        assert_eq!(store.get(&id), None);

        store.set(&id, true);
        assert_eq!(store.raw(&id).as_deref(), Some("true"));
        assert_eq!(store.get(&id), Some(true));

        store.set(&id, false);
        assert_eq!(store.raw(&id).as_deref(), Some("false"));
        assert_eq!(store.get(&id), Some(false));

        store.remove(&id);
        assert_eq!(store.raw(&id), None);
        assert!(store.resolve(&id, true));
    }

    #[test]
    fn garbage_values_fall_back_to_default() {
        let mut backend = MemoryStore::new();
        backend.set_item("card-3-liked", "maybe");
        let store = LikeStore::new(Box::new(backend), DEFAULT_NAMESPACE);
        let id = CardId::new("3");
        assert_eq!(store.get(&id), None);
        assert!(!store.resolve(&id, false));
    }

    #[test]
    fn namespaces_are_isolated() {
        let mut backend = MemoryStore::new();
        backend.set_item("card-1-liked", "true");
        let store = LikeStore::new(Box::new(backend), "other");
        assert_eq!(store.get(&CardId::new("1")), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("likes.json");

        {
            let mut store = LikeStore::new(
                Box::new(FileStore::open(&path).unwrap()),
                DEFAULT_NAMESPACE,
            );
            store.set(&CardId::new("a"), true);
            store.set(&CardId::new("b"), false);
            store.remove(&CardId::new("b"));
        }

        let store = LikeStore::new(Box::new(FileStore::open(&path).unwrap()), DEFAULT_NAMESPACE);
        assert_eq!(store.get(&CardId::new("a")), Some(true));
        assert_eq!(store.get(&CardId::new("b")), None);
    }

    #[test]
    fn file_store_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("likes.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(FileStore::open(&path), Err(StoreError::Json { .. })));
    }
}
