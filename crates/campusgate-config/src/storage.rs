//! Preference storage configuration.
//!
//! `PREFERENCES_STORAGE` selects the backend: `memory` keeps preferences in
//! process (lost on restart), anything else is a path to the JSON file that
//! backs the durable key-value store. Default: `storage/preferences.json`.

use std::env;
use std::path::PathBuf;

const DEFAULT_PATH: &str = "storage/preferences.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File(PathBuf::from(DEFAULT_PATH)),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(env::var("PREFERENCES_STORAGE").ok().as_deref())
    }

    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("memory") => Self {
                backend: StorageBackend::Memory,
            },
            Some(path) if !path.is_empty() => Self {
                backend: StorageBackend::File(PathBuf::from(path)),
            },
            _ => Self::default(),
        }
    }
}
