//! JWT utilities for session tokens.
//!
//! Tokens are signed with HS256 using [`JwtConfig::secret`] and expire after
//! [`JwtConfig::access_token_expiry`] seconds.
//!
//! # Example
//!
//! ```ignore
//! use campusgate_auth::{create_access_token, verify_token};
//! use campusgate_config::JwtConfig;
//! use campusgate_core::{Role, ViewAs};
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "ada@example.com", Role::Admin, ViewAs::Current, &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use campusgate_config::JwtConfig;
use campusgate_core::{AppError, Role, ViewAs};

use crate::claims::Claims;
use crate::state::SessionUser;

/// Creates a signed access token.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    role: Role,
    view_as: ViewAs,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    sign(user_id.to_string(), email, role, view_as, jwt_config)
}

/// Re-issues a token for an existing session user, e.g. after a role switch.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_session_token(
    user: &SessionUser,
    view_as: ViewAs,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    sign(user.id.clone(), &user.email, user.role, view_as, jwt_config)
}

fn sign(
    sub: String,
    email: &str,
    role: Role,
    view_as: ViewAs,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub,
        email: email.to_string(),
        role,
        view_as,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or it is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}
