#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use uuid::Uuid;

use campusgate::providers::FeatureFlagProvider;
use campusgate::router::init_router;
use campusgate::sidebar::{KeyValueStore, MemoryStore};
use campusgate::state::AppState;
use campusgate_auth::create_access_token;
use campusgate_config::{CorsConfig, JwtConfig, LocalizationConfig};
use campusgate_core::{Role, ViewAs, features};

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".to_string(),
        access_token_expiry: 3600,
    }
}

/// App state with an in-memory preference store and resolved default flags.
pub fn test_state() -> AppState {
    test_state_with_flags(FeatureFlagProvider::with_features(
        features::DEFAULT_ENABLED.iter().copied(),
    ))
}

pub fn test_state_with_flags(feature_flags: FeatureFlagProvider) -> AppState {
    let preferences: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    AppState {
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::default(),
        localization: Arc::new(LocalizationConfig::default()),
        feature_flags,
        preferences,
    }
}

pub fn test_app() -> axum::Router {
    init_router(test_state())
}

pub fn token_for(role: Role) -> String {
    token_with_view_as(Uuid::new_v4(), role, ViewAs::Current)
}

pub fn token_with_view_as(user_id: Uuid, role: Role, view_as: ViewAs) -> String {
    create_access_token(
        user_id,
        &format!("{}@example.com", role),
        role,
        view_as,
        &test_jwt_config(),
    )
    .unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
