use crate::modules::sidebar::controller::{get_sidebar, toggle_sidebar_group};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_sidebar_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_sidebar))
        .route("/{category}/toggle", post(toggle_sidebar_group))
}
