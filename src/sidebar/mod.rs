//! Sidebar group state.
//!
//! Remembers which collapsible menu groups are expanded and persists the map
//! to a key-value store after every toggle.
//!
//! - [`groups`]: categories, the default map and the [`SidebarState`] owner
//! - [`storage`]: the [`KeyValueStore`] abstraction with memory and JSON file backends

pub mod groups;
pub mod storage;

pub use groups::{STORAGE_KEY, SidebarCategory, SidebarGroups, SidebarState, user_storage_key};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError, UpdateFn, open_store};
