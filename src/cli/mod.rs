//! Offline helpers behind `campusgate-cli`.
//!
//! [`decide`] runs a request path through the same page table and gates the
//! HTTP router uses, without starting a server.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use campusgate_auth::{AuthState, SessionUser, create_access_token};
use campusgate_config::{JwtConfig, LocalizationConfig};
use campusgate_core::{AppError, GuardDecision, Role, ViewAs};

use crate::guards::LanguageGate;
use crate::providers::{FeatureFlagState, LocalizationProvider};
use crate::routes::{PageRoute, find_page};

/// Outcome of [`decide`], printed as JSON by the CLI.
#[derive(Debug, Serialize)]
pub struct DecisionReport {
    pub path: String,
    pub page: Option<&'static str>,
    pub language: String,
    pub gate: &'static str,
    pub decision: GuardDecision,
}

/// Auth state for a simulated visitor.
pub fn simulated_auth(role: Option<Role>, view_as: ViewAs, loading: bool) -> AuthState {
    if loading {
        return AuthState::loading();
    }
    match role {
        Some(role) => AuthState::authenticated(
            SessionUser {
                id: "cli-user".to_string(),
                email: "cli@example.com".to_string(),
                role,
            },
            view_as,
        ),
        None => AuthState::anonymous(),
    }
}

/// Split `/{language}/rest` when the first segment is not itself a page.
fn split_language(path: &str) -> Option<(&str, String)> {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], trimmed[idx..].to_string()),
        None => (trimmed, "/".to_string()),
    };
    if first.is_empty() {
        return None;
    }
    Some((first, rest))
}

/// Evaluate the gates for `path`.
///
/// Paths matching a page directly are served in the default language. Any
/// other path is read as `/{language}/page` and passes through the language
/// gate first.
///
/// # Errors
///
/// Returns a not-found error when no page matches the path.
pub fn decide(
    path: &str,
    auth: &AuthState,
    flags: &FeatureFlagState,
    localization: Arc<LocalizationConfig>,
) -> Result<DecisionReport, AppError> {
    let l10n = LocalizationProvider::new(localization);

    if let Some(route) = find_page(path) {
        return Ok(report(path, &route, auth, flags, &l10n));
    }

    let (language, rest) = split_language(path)
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No page matches {}", path)))?;
    let route = find_page(&rest)
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No page matches {}", path)))?;

    let language_decision = LanguageGate::new().evaluate(Some(language), &l10n);
    if !language_decision.is_render() {
        return Ok(DecisionReport {
            path: path.to_string(),
            page: Some(route.page),
            language: l10n.active_language(),
            gate: "language",
            decision: language_decision,
        });
    }

    Ok(report(path, &route, auth, flags, &l10n))
}

fn report(
    path: &str,
    route: &PageRoute,
    auth: &AuthState,
    flags: &FeatureFlagState,
    l10n: &LocalizationProvider,
) -> DecisionReport {
    DecisionReport {
        path: path.to_string(),
        page: Some(route.page),
        language: l10n.active_language(),
        gate: route.gate_name(),
        decision: l10n.localize_decision(route.evaluate(auth, flags)),
    }
}

/// Mint a development access token.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn issue_token(
    email: &str,
    role: Role,
    view_as: ViewAs,
    user_id: Option<Uuid>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_access_token(
        user_id.unwrap_or_else(Uuid::new_v4),
        email,
        role,
        view_as,
        jwt_config,
    )
}
