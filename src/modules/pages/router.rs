use crate::middleware::gate::{PageGateState, page_gate};
use crate::modules::pages::controller::render_page;
use crate::routes::page_routes;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

/// One route per entry of the page table, each behind its own gate.
pub fn init_pages_router(state: AppState) -> Router<AppState> {
    page_routes()
        .into_iter()
        .fold(Router::new(), |router, route| {
            let path = route.path;
            router.route(
                path,
                get(render_page).route_layer(middleware::from_fn_with_state(
                    PageGateState::new(state.clone(), route),
                    page_gate,
                )),
            )
        })
}
