//! Durable key-value storage for user preferences.
//!
//! The interface mirrors a browser's local storage: string keys mapped to
//! string values. Implementations can be swapped without changing the sidebar
//! logic.
//!
//! # Example
//!
//! ```ignore
//! use campusgate::sidebar::{JsonFileStore, KeyValueStore};
//!
//! let store = JsonFileStore::new("storage/preferences.json");
//! store.set("sidebarGroups", r#"{"general":true}"#).await?;
//! let raw = store.get("sidebarGroups").await?;
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::warn;

use campusgate_config::{StorageBackend, StorageConfig};

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StorageError>> + Send + 'a>>;

/// Computes the new value for a key from its current one.
pub type UpdateFn<'a> = Box<dyn FnOnce(Option<String>) -> String + Send + 'a>;

/// Abstract trait for preference storage backends.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StoreFuture<'a, ()>;

    /// Atomically replace the value under `key` with `f(current)` and return
    /// the stored value. No other write to the store interleaves with it.
    fn update<'a>(&'a self, key: &'a str, f: UpdateFn<'a>) -> StoreFuture<'a, String>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a JSON object of strings: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// In-process store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
        Box::pin(async move { Ok(self.entries.read().await.get(key).cloned()) })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            self.entries
                .write()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn update<'a>(&'a self, key: &'a str, f: UpdateFn<'a>) -> StoreFuture<'a, String> {
        Box::pin(async move {
            let mut entries = self.entries.write().await;
            let value = f(entries.get(key).cloned());
            entries.insert(key.to_string(), value.clone());
            Ok(value)
        })
    }
}

/// Store backed by a single JSON object file (`{"key": "value", ...}`).
///
/// Writes go through a temporary file and a rename so a crash never leaves a
/// half-written file behind. A lock serializes read-modify-write cycles.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(HashMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Entries to write back on top of. Corrupt files are overwritten; I/O
    /// errors abort the write so other keys are never dropped.
    async fn read_for_write(&self) -> Result<HashMap<String, String>, StorageError> {
        match self.read_all().await {
            Err(StorageError::Corrupt(e)) => {
                warn!(path = %self.path.display(), error = %e, "Overwriting corrupt preference file");
                Ok(HashMap::new())
            }
            other => other,
        }
    }

    async fn write_all(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(entries)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            Ok(self.read_all().await?.remove(key))
        })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            let mut entries = self.read_for_write().await?;
            entries.insert(key.to_string(), value.to_string());
            self.write_all(&entries).await
        })
    }

    fn update<'a>(&'a self, key: &'a str, f: UpdateFn<'a>) -> StoreFuture<'a, String> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            let mut entries = self.read_for_write().await?;
            let value = f(entries.remove(key));
            entries.insert(key.to_string(), value.clone());
            self.write_all(&entries).await?;
            Ok(value)
        })
    }
}

/// Build the store selected by the configuration.
pub fn open_store(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match &config.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File(path) => Arc::new(JsonFileStore::new(path.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("campusgate-{}", uuid::Uuid::new_v4()))
            .join("preferences.json")
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let path = temp_path();
        let store = JsonFileStore::new(&path);
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("a").await.unwrap(), Some("1".to_string()));
        assert_eq!(reopened.get("b").await.unwrap(), Some("2".to_string()));
        assert_eq!(reopened.get("c").await.unwrap(), None);

        let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file() {
        let path = temp_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "{not json").await.unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("a").await, Err(StorageError::Corrupt(_))));

        store.set("a", "1").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some("1".to_string()));

        let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn test_update_applies_to_current_value() {
        let path = temp_path();
        let stores: [Arc<dyn KeyValueStore>; 2] =
            [Arc::new(MemoryStore::new()), Arc::new(JsonFileStore::new(&path))];

        for store in stores {
            store.set("other", "kept").await.unwrap();
            let first = store
                .update("n", Box::new(|current| format!("{:?}", current)))
                .await
                .unwrap();
            assert_eq!(first, "None");

            let second = store
                .update("n", Box::new(|current| current.unwrap_or_default() + "!"))
                .await
                .unwrap();
            assert_eq!(second, "None!");
            assert_eq!(store.get("n").await.unwrap(), Some("None!".to_string()));
            assert_eq!(store.get("other").await.unwrap(), Some("kept".to_string()));
        }

        let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn test_file_store_read_error_is_not_treated_as_empty() {
        // A directory at the file path fails to read with an I/O error
        let path = temp_path();
        tokio::fs::create_dir_all(&path).await.unwrap();
        tokio::fs::write(path.join("keep"), "x").await.unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.read_for_write().await, Err(StorageError::Io(_))));
        assert!(matches!(store.set("a", "1").await, Err(StorageError::Io(_))));
        assert!(matches!(
            store.update("a", Box::new(|_| "1".to_string())).await,
            Err(StorageError::Io(_))
        ));
        assert!(tokio::fs::metadata(path.join("keep")).await.is_ok());

        let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file_reads_as_empty_for_write() {
        let path = temp_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "[1, 2]").await.unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.read_for_write().await.unwrap().is_empty());

        let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[test]
    fn test_open_store_memory() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
        };
        let _store = open_store(&config);
    }
}
