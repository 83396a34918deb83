use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use campusgate_config::FeatureFlagsConfig;

/// Snapshot of the feature flag provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlagState {
    pub is_loading: bool,
    pub enabled: BTreeSet<String>,
}

impl Default for FeatureFlagState {
    fn default() -> Self {
        Self::loading()
    }
}

impl FeatureFlagState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            enabled: BTreeSet::new(),
        }
    }

    pub fn resolved<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_loading: false,
            enabled: features.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership test; always false while loading.
    pub fn is_enabled(&self, feature: &str) -> bool {
        self.enabled.contains(feature)
    }
}

/// Provider handle; clones share the same state.
#[derive(Debug, Clone)]
pub struct FeatureFlagProvider {
    state: Arc<watch::Sender<FeatureFlagState>>,
}

impl Default for FeatureFlagProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureFlagProvider {
    pub fn new() -> Self {
        let (state, _) = watch::channel(FeatureFlagState::loading());
        Self {
            state: Arc::new(state),
        }
    }

    /// A provider that is already resolved with the given features.
    pub fn with_features<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (state, _) = watch::channel(FeatureFlagState::resolved(features));
        Self {
            state: Arc::new(state),
        }
    }

    pub fn current(&self) -> FeatureFlagState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FeatureFlagState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn is_feature_enabled(&self, feature: &str) -> bool {
        self.state.borrow().is_enabled(feature)
    }

    /// Populate the flag set. The set is immutable once resolved: later calls
    /// are ignored and return `false`.
    pub fn resolve<I, S>(&self, features: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let resolved = FeatureFlagState::resolved(features);
        let count = resolved.enabled.len();
        let applied = self.state.send_if_modified(|state| {
            if !state.is_loading {
                return false;
            }
            *state = resolved;
            true
        });

        if applied {
            info!(enabled = count, "Feature flags resolved");
        } else {
            warn!("Feature flags already resolved, ignoring update");
        }
        applied
    }

    /// Load the flag set from the configured source and resolve the provider.
    ///
    /// A missing or malformed `FEATURE_FLAGS_FILE` falls back to the list in
    /// the config.
    pub async fn load(&self, config: &FeatureFlagsConfig) {
        let features = match &config.source_file {
            Some(path) => match read_flags_file(path).await {
                Ok(features) => features,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to read feature flags file, using configured defaults"
                    );
                    config.enabled.clone()
                }
            },
            None => config.enabled.clone(),
        };

        self.resolve(features);
    }
}

async fn read_flags_file(path: &std::path::Path) -> anyhow::Result<Vec<String>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let features: Vec<String> = serde_json::from_str(&raw)?;
    Ok(features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusgate_core::features::{COURSES, PAYMENTS};

    #[test]
    fn test_new_provider_is_loading() {
        let provider = FeatureFlagProvider::new();
        assert!(provider.is_loading());
        assert!(!provider.is_feature_enabled(COURSES));
    }

    #[test]
    fn test_resolve_once() {
        let provider = FeatureFlagProvider::new();
        assert!(provider.resolve([COURSES]));
        assert!(!provider.is_loading());
        assert!(provider.is_feature_enabled(COURSES));

        assert!(!provider.resolve([PAYMENTS]));
        assert!(!provider.is_feature_enabled(PAYMENTS));
    }

    #[test]
    fn test_clones_share_state() {
        let provider = FeatureFlagProvider::new();
        let clone = provider.clone();
        provider.resolve([PAYMENTS]);
        assert!(clone.is_feature_enabled(PAYMENTS));
    }

    #[tokio::test]
    async fn test_load_from_config_list() {
        let provider = FeatureFlagProvider::new();
        provider
            .load(&FeatureFlagsConfig::with_enabled([PAYMENTS]))
            .await;
        assert!(provider.is_feature_enabled(PAYMENTS));
        assert!(!provider.is_feature_enabled(COURSES));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("flags-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, r#"["payments", " community "]"#)
            .await
            .unwrap();

        let config = FeatureFlagsConfig {
            enabled: vec![COURSES.to_string()],
            source_file: Some(path.clone()),
        };
        let provider = FeatureFlagProvider::new();
        provider.load(&config).await;

        assert!(provider.is_feature_enabled(PAYMENTS));
        assert!(provider.is_feature_enabled("community"));
        assert!(!provider.is_feature_enabled(COURSES));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_load_falls_back_on_bad_file() {
        let path = std::env::temp_dir().join(format!("flags-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, "not json").await.unwrap();

        let config = FeatureFlagsConfig {
            enabled: vec![COURSES.to_string()],
            source_file: Some(path.clone()),
        };
        let provider = FeatureFlagProvider::new();
        provider.load(&config).await;

        assert!(!provider.is_loading());
        assert!(provider.is_feature_enabled(COURSES));

        let _ = tokio::fs::remove_file(&path).await;
    }
}
