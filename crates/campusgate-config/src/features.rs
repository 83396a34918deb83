//! Feature flag sources.
//!
//! The enabled set is resolved in this order:
//!
//! 1. `FEATURE_FLAGS_FILE`: path to a JSON array of feature names, read
//!    asynchronously at start-up by the feature flag provider
//! 2. `FEATURE_FLAGS`: comma separated list of feature names
//! 3. [`campusgate_core::features::DEFAULT_ENABLED`]
//!
//! When the file cannot be read the provider falls back to the list from
//! step 2 or 3.

use std::env;
use std::path::PathBuf;

use campusgate_core::features::DEFAULT_ENABLED;

use crate::split_list;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureFlagsConfig {
    /// Features enabled when no file source is configured or it fails to load.
    pub enabled: Vec<String>,
    /// Optional JSON file holding the enabled feature names.
    pub source_file: Option<PathBuf>,
}

impl Default for FeatureFlagsConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED.iter().map(|f| f.to_string()).collect(),
            source_file: None,
        }
    }
}

impl FeatureFlagsConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("FEATURE_FLAGS").ok().as_deref(),
            env::var("FEATURE_FLAGS_FILE").ok().as_deref(),
        )
    }

    #[must_use]
    pub fn from_values(flags: Option<&str>, source_file: Option<&str>) -> Self {
        let enabled = match flags {
            Some(raw) => split_list(raw),
            None => Self::default().enabled,
        };
        let source_file = source_file
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            enabled,
            source_file,
        }
    }

    /// Builder used by tests and the CLI.
    #[must_use]
    pub fn with_enabled<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: features.into_iter().map(Into::into).collect(),
            source_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusgate_core::features::{COURSES, PAYMENTS};

    #[test]
    fn test_default_list() {
        let config = FeatureFlagsConfig::default();
        assert!(config.enabled.iter().any(|f| f == COURSES));
        assert!(!config.enabled.iter().any(|f| f == PAYMENTS));
        assert!(config.source_file.is_none());
    }

    #[test]
    fn test_env_list_overrides_default() {
        let config = FeatureFlagsConfig::from_values(Some("payments, courses ,,"), None);
        assert_eq!(config.enabled, vec!["payments", "courses"]);
    }

    #[test]
    fn test_empty_env_list_disables_everything() {
        let config = FeatureFlagsConfig::from_values(Some(""), None);
        assert!(config.enabled.is_empty());
    }

    #[test]
    fn test_blank_source_file_ignored() {
        let config = FeatureFlagsConfig::from_values(None, Some("  "));
        assert!(config.source_file.is_none());

        let config = FeatureFlagsConfig::from_values(None, Some("flags.json"));
        assert_eq!(config.source_file, Some(PathBuf::from("flags.json")));
    }
}
