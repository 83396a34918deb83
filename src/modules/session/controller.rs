use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use serde::Serialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

use campusgate_auth::{AuthProvider, AuthState, create_session_token};
use campusgate_core::{AppError, ViewAs};
use campusgate_observability::track_view_as_switch;

use crate::middleware::auth::{AuthUser, SESSION_COOKIE, Session};
use crate::modules::session::model::{SessionResponse, ViewAsRequest, ViewAsResponse};
use crate::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build()
}

/// Get the current session
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current session, anonymous when no valid token is sent", body = SessionResponse),
    ),
    tag = "Session"
)]
#[instrument(skip_all)]
pub async fn get_session(Session(auth): Session) -> Json<SessionResponse> {
    Json(SessionResponse::from(&auth))
}

/// Switch the admin view-as role
///
/// Re-issues the session token with the new override and sets it as the
/// session cookie.
#[utoipa::path(
    put,
    path = "/api/session/view-as",
    request_body = ViewAsRequest,
    responses(
        (status = 200, description = "View-as role updated", body = ViewAsResponse),
        (status = 400, description = "Unknown role", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - only administrators may switch roles", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Session"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id(), view_as = %dto.view_as))]
pub async fn set_view_as(
    State(state): State<AppState>,
    jar: CookieJar,
    auth_user: AuthUser,
    Json(dto): Json<ViewAsRequest>,
) -> Result<(CookieJar, Json<ViewAsResponse>), AppError> {
    let view_as: ViewAs = dto.view_as.parse().map_err(AppError::bad_request)?;

    let provider = AuthProvider::resolved(AuthState::from_claims(Some(&auth_user.0)));
    provider.set_view_as_role(view_as)?;

    let auth = provider.current();
    let user = auth
        .user
        .as_ref()
        .ok_or_else(|| AppError::unauthorized("No active session".to_string()))?;
    let access_token = create_session_token(user, auth.view_as_role, &state.jwt_config)?;
    track_view_as_switch(view_as.as_str());

    Ok((
        jar.add(session_cookie(access_token.clone())),
        Json(ViewAsResponse {
            access_token,
            session: SessionResponse::from(&auth),
        }),
    ))
}

/// Sign out
///
/// Clears the session cookie. Bearer tokens are stateless and simply expire.
#[utoipa::path(
    post,
    path = "/api/session/logout",
    responses(
        (status = 204, description = "Session cookie cleared"),
    ),
    tag = "Session"
)]
#[instrument(skip_all)]
pub async fn logout(Session(auth): Session, jar: CookieJar) -> (CookieJar, StatusCode) {
    let user_id = auth.user.as_ref().map(|user| user.id.as_str());
    info!(user_id = ?user_id, "Session cookie cleared");

    (
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        StatusCode::NO_CONTENT,
    )
}
