use std::sync::Arc;

use campusgate_config::{
    CorsConfig, FeatureFlagsConfig, JwtConfig, LocalizationConfig, StorageConfig,
};

use crate::providers::{FeatureFlagProvider, LocalizationProvider};
use crate::sidebar::{KeyValueStore, open_store};

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub localization: Arc<LocalizationConfig>,
    pub feature_flags: FeatureFlagProvider,
    pub preferences: Arc<dyn KeyValueStore>,
}

impl AppState {
    /// A localization provider scoped to one request, starting on the
    /// default language.
    pub fn localization_provider(&self) -> LocalizationProvider {
        LocalizationProvider::new(self.localization.clone())
    }
}

/// Build the state from the environment.
///
/// Feature flags start loading; call [`spawn_feature_flag_load`] once a
/// runtime is available to resolve them.
pub fn init_app_state() -> AppState {
    AppState {
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        localization: Arc::new(LocalizationConfig::from_env()),
        feature_flags: FeatureFlagProvider::new(),
        preferences: open_store(&StorageConfig::from_env()),
    }
}

pub fn spawn_feature_flag_load(state: &AppState, config: FeatureFlagsConfig) {
    let provider = state.feature_flags.clone();
    tokio::spawn(async move {
        provider.load(&config).await;
    });
}
