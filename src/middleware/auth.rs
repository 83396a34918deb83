use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use axum_extra::extract::CookieJar;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use tracing::debug;

use campusgate_auth::{AuthState, Claims, verify_token};
use campusgate_config::JwtConfig;
use campusgate_core::{AppError, Role};

use crate::state::AppState;

/// Cookie carrying the session token for browser navigation.
pub const SESSION_COOKIE: &str = "session";

/// Session token from `Authorization: Bearer`, falling back to the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }

    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// Verified claims for the request, if it carries a valid token.
pub fn session_claims(headers: &HeaderMap, jwt_config: &JwtConfig) -> Option<Claims> {
    let token = session_token(headers)?;
    match verify_token(&token, jwt_config) {
        Ok(claims) => Some(claims),
        Err(e) => {
            debug!(error = %e, "Ignoring invalid session token");
            None
        }
    }
}

/// Resolve the auth state for one request.
///
/// Session restoration is synchronous on the server, so the result is never
/// loading: a missing or invalid token means anonymous.
pub fn resolve_auth_state(headers: &HeaderMap, jwt_config: &JwtConfig) -> AuthState {
    AuthState::from_claims(session_claims(headers, jwt_config).as_ref())
}

/// The request's auth state. Never rejects.
///
/// Reuses the state a page gate already resolved when one is present.
#[derive(Debug, Clone)]
pub struct Session(pub AuthState);

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth) = parts.extensions.get::<AuthState>() {
            return Ok(Session(auth.clone()));
        }
        Ok(Session(resolve_auth_state(&parts.headers, &state.jwt_config)))
    }
}

/// Extractor that requires a valid session token and provides its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> &str {
        &self.0.sub
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers)
            .ok_or_else(|| AppError::unauthorized("Missing session token".to_string()))?;

        let claims = verify_token(&token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
