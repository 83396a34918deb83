use axum::{Json, extract::State};
use tracing::instrument;

use crate::modules::features::model::FeaturesResponse;
use crate::state::AppState;

/// List enabled feature flags
#[utoipa::path(
    get,
    path = "/api/features",
    responses(
        (status = 200, description = "Feature flag set; `is_loading` until the source resolved", body = FeaturesResponse),
    ),
    tag = "Features"
)]
#[instrument(skip_all)]
pub async fn get_features(State(state): State<AppState>) -> Json<FeaturesResponse> {
    Json(FeaturesResponse::from(&state.feature_flags.current()))
}
