use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use super::storage::KeyValueStore;

/// Storage key holding the JSON encoded group map.
pub const STORAGE_KEY: &str = "sidebarGroups";

/// Per-user storage key used by the HTTP API.
pub fn user_storage_key(user_id: &str) -> String {
    format!("{}:{}", STORAGE_KEY, user_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SidebarCategory {
    General,
    Learning,
    Community,
    Administration,
    Instructor,
    Account,
    Sistemas,
}

impl SidebarCategory {
    pub const ALL: [SidebarCategory; 7] = [
        SidebarCategory::General,
        SidebarCategory::Learning,
        SidebarCategory::Community,
        SidebarCategory::Administration,
        SidebarCategory::Instructor,
        SidebarCategory::Account,
        SidebarCategory::Sistemas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarCategory::General => "general",
            SidebarCategory::Learning => "learning",
            SidebarCategory::Community => "community",
            SidebarCategory::Administration => "administration",
            SidebarCategory::Instructor => "instructor",
            SidebarCategory::Account => "account",
            SidebarCategory::Sistemas => "sistemas",
        }
    }

    /// Expanded state when nothing was stored.
    pub fn default_expanded(&self) -> bool {
        matches!(self, SidebarCategory::General | SidebarCategory::Learning)
    }
}

impl fmt::Display for SidebarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SidebarCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SidebarCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown sidebar category: {}", s))
    }
}

/// Expanded/collapsed flag for every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarGroups {
    groups: BTreeMap<SidebarCategory, bool>,
}

impl Default for SidebarGroups {
    fn default() -> Self {
        Self {
            groups: SidebarCategory::ALL
                .into_iter()
                .map(|category| (category, category.default_expanded()))
                .collect(),
        }
    }
}

impl SidebarGroups {
    /// Rehydrate from a stored value.
    ///
    /// Anything that is not a JSON object yields the default map. Known
    /// categories holding a boolean keep their value; missing or non-boolean
    /// entries take their default and unknown keys are dropped.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let mut groups = Self::default();
        let Some(raw) = raw else {
            return groups;
        };

        let stored = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!("Stored sidebar groups are corrupt, using defaults");
                return groups;
            }
        };

        for category in SidebarCategory::ALL {
            if let Some(expanded) = stored.get(category.as_str()).and_then(|v| v.as_bool()) {
                groups.groups.insert(category, expanded);
            }
        }
        groups
    }

    pub fn is_expanded(&self, category: SidebarCategory) -> bool {
        self.groups
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_expanded())
    }

    /// Flip one category and return its new value.
    pub fn toggle(&mut self, category: SidebarCategory) -> bool {
        let expanded = !self.is_expanded(category);
        self.groups.insert(category, expanded);
        expanded
    }

    /// `category -> expanded`, keyed by the category's wire name.
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.groups
            .iter()
            .map(|(category, expanded)| (category.as_str().to_string(), *expanded))
            .collect()
    }

    pub fn to_json(&self) -> String {
        // A map of string keys to booleans always serializes
        serde_json::to_string(&self.to_map()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Sidebar groups bound to the store they persist to.
pub struct SidebarState {
    store: Arc<dyn KeyValueStore>,
    key: String,
    groups: SidebarGroups,
}

impl SidebarState {
    /// Load the groups stored under `key`; storage errors fall back to defaults.
    pub async fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let raw = match store.get(&key).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read sidebar groups, using defaults");
                None
            }
        };
        let groups = SidebarGroups::from_stored(raw.as_deref());

        Self { store, key, groups }
    }

    pub fn groups(&self) -> &SidebarGroups {
        &self.groups
    }

    /// Flip `category`, persist the full map and return the new value.
    ///
    /// The flip is applied to the stored map inside one store update, so
    /// concurrent toggles of different categories under the same key all
    /// survive. A failed write is logged; the in-memory state keeps the new
    /// value.
    pub async fn toggle_group(&mut self, category: SidebarCategory) -> bool {
        let update = self.store.update(
            &self.key,
            Box::new(move |current| {
                let mut groups = SidebarGroups::from_stored(current.as_deref());
                groups.toggle(category);
                groups.to_json()
            }),
        );

        match update.await {
            Ok(stored) => self.groups = SidebarGroups::from_stored(Some(&stored)),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to persist sidebar groups");
                self.groups.toggle(category);
            }
        }
        self.groups.is_expanded(category)
    }
}
