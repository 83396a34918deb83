use std::sync::Arc;

use axum::{Extension, Json};

use crate::middleware::auth::Session;
use crate::modules::pages::model::PageResponse;
use crate::providers::LocalizationProvider;
use crate::routes::PageRoute;

/// Render a page that passed its gates.
pub async fn render_page(
    Extension(route): Extension<Arc<PageRoute>>,
    Extension(l10n): Extension<LocalizationProvider>,
    Session(auth): Session,
) -> Json<PageResponse> {
    Json(PageResponse::new(
        route.page,
        route.path,
        l10n.active_language(),
        &auth,
    ))
}
