use serde::Serialize;
use utoipa::ToSchema;

use crate::providers::FeatureFlagState;

#[derive(Debug, Serialize, ToSchema)]
pub struct FeaturesResponse {
    pub is_loading: bool,
    /// Enabled feature names, sorted
    pub enabled: Vec<String>,
}

impl From<&FeatureFlagState> for FeaturesResponse {
    fn from(state: &FeatureFlagState) -> Self {
        Self {
            is_loading: state.is_loading,
            enabled: state.enabled.iter().cloned().collect(),
        }
    }
}
