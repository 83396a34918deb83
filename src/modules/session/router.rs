use crate::modules::session::controller::{get_session, logout, set_view_as};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn init_session_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/view-as", put(set_view_as))
        .route("/logout", post(logout))
}
