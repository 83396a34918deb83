use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{debug, instrument};

use campusgate_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::session::controller::ErrorResponse;
use crate::modules::sidebar::model::{SidebarResponse, ToggleGroupResponse};
use crate::sidebar::{SidebarCategory, SidebarState, user_storage_key};
use crate::state::AppState;

/// Get the sidebar group state of the signed-in user
#[utoipa::path(
    get,
    path = "/api/sidebar",
    responses(
        (status = 200, description = "Expanded state per sidebar category", body = SidebarResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Sidebar"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn get_sidebar(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<SidebarResponse>, AppError> {
    let sidebar = SidebarState::load(
        state.preferences.clone(),
        user_storage_key(auth_user.user_id()),
    )
    .await;
    Ok(Json(SidebarResponse::from(sidebar.groups())))
}

/// Toggle one sidebar group and persist the result
#[utoipa::path(
    post,
    path = "/api/sidebar/{category}/toggle",
    params(
        ("category" = String, Path, description = "Sidebar category, e.g. `community`")
    ),
    responses(
        (status = 200, description = "Group toggled", body = ToggleGroupResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown sidebar category", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Sidebar"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id(), category = %category))]
pub async fn toggle_sidebar_group(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(category): Path<String>,
) -> Result<Json<ToggleGroupResponse>, AppError> {
    let category: SidebarCategory = category
        .parse()
        .map_err(|e: String| AppError::not_found(anyhow::anyhow!(e)))?;

    let mut sidebar = SidebarState::load(
        state.preferences.clone(),
        user_storage_key(auth_user.user_id()),
    )
    .await;
    let expanded = sidebar.toggle_group(category).await;
    debug!(category = %category, expanded, "Sidebar group toggled");

    Ok(Json(ToggleGroupResponse {
        category,
        expanded,
        groups: sidebar.groups().to_map(),
    }))
}
