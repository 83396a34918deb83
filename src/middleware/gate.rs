use std::sync::Arc;

use axum::{
    Json,
    extract::{RawPathParams, Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use tracing::debug;

use campusgate_core::GuardDecision;
use campusgate_observability::track_guard_decision;

use crate::guards::LanguageGate;
use crate::middleware::auth::resolve_auth_state;
use crate::providers::LocalizationProvider;
use crate::routes::PageRoute;
use crate::state::AppState;

/// Path parameter holding the language segment.
pub const LANGUAGE_PARAM: &str = "language";

/// State for the page gate: the app plus the page it guards.
#[derive(Clone)]
pub struct PageGateState {
    pub app: AppState,
    pub route: Arc<PageRoute>,
}

impl PageGateState {
    pub fn new(app: AppState, route: PageRoute) -> Self {
        Self {
            app,
            route: Arc::new(route),
        }
    }
}

/// HTTP rendition of a decision that does not render.
///
/// - `Loading`: 503 with `Retry-After: 1`
/// - replace redirect: 303 See Other
/// - push redirect: 307 Temporary Redirect
pub fn decision_response(decision: GuardDecision) -> Option<Response> {
    match decision {
        GuardDecision::Render => None,
        GuardDecision::Loading => Some(
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [(header::RETRY_AFTER, "1")],
                Json(json!({ "status": "loading" })),
            )
                .into_response(),
        ),
        GuardDecision::Redirect(redirect) if redirect.replace => {
            Some(Redirect::to(&redirect.to).into_response())
        }
        GuardDecision::Redirect(redirect) => Some(Redirect::temporary(&redirect.to).into_response()),
    }
}

/// Evaluate the page's access and feature gates before the handler runs.
///
/// Redirect targets are localized for the language activated by
/// [`language_gate`]. On render the auth state, localization provider and
/// page route are handed to the handler through the request extensions.
pub async fn page_gate(
    State(gate): State<PageGateState>,
    mut req: Request,
    next: Next,
) -> Response {
    let auth = resolve_auth_state(req.headers(), &gate.app.jwt_config);
    let flags = gate.app.feature_flags.current();

    // Root-mounted pages serve the default language.
    let l10n = req
        .extensions()
        .get::<LocalizationProvider>()
        .cloned()
        .unwrap_or_else(|| gate.app.localization_provider());
    let decision = l10n.localize_decision(gate.route.evaluate(&auth, &flags));

    track_guard_decision(gate.route.gate_name(), decision.outcome());
    debug!(
        page = gate.route.page,
        gate = gate.route.gate_name(),
        outcome = decision.outcome(),
        "Page gate evaluated"
    );

    match decision_response(decision) {
        Some(response) => response,
        None => {
            let extensions = req.extensions_mut();
            extensions.insert(auth);
            extensions.insert(l10n);
            extensions.insert(gate.route.clone());
            next.run(req).await
        }
    }
}

/// Validate the `/{language}` segment and activate it for the request.
pub async fn language_gate(
    State(state): State<AppState>,
    params: RawPathParams,
    mut req: Request,
    next: Next,
) -> Response {
    let language = params
        .iter()
        .find(|(key, _)| *key == LANGUAGE_PARAM)
        .map(|(_, value)| value.to_string());

    let l10n = state.localization_provider();
    let decision = LanguageGate::new().evaluate(language.as_deref(), &l10n);
    track_guard_decision("language", decision.outcome());

    if let Some(response) = decision_response(decision) {
        debug!(language = ?language, "Rejected language segment");
        return response;
    }

    req.extensions_mut().insert(l10n);
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusgate_core::{DenialReason, Redirect as GateRedirect};

    #[test]
    fn test_render_has_no_response() {
        assert!(decision_response(GuardDecision::Render).is_none());
    }

    #[test]
    fn test_loading_is_service_unavailable() {
        let response = decision_response(GuardDecision::Loading).unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "1");
    }

    #[test]
    fn test_replace_redirect_is_see_other() {
        let response = decision_response(GuardDecision::redirect(
            "/login",
            DenialReason::Unauthenticated,
        ))
        .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[test]
    fn test_push_redirect_is_temporary() {
        let response = decision_response(GuardDecision::Redirect(GateRedirect {
            to: "/courses".to_string(),
            replace: false,
            reason: DenialReason::FeatureDisabled,
        }))
        .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    }
}
