use crate::modules::features::controller::get_features;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_features_router() -> Router<AppState> {
    Router::new().route("/", get(get_features))
}
