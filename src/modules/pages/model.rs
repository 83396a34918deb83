use serde::Serialize;
use utoipa::ToSchema;

use campusgate_auth::AuthState;
use campusgate_core::Role;

/// Descriptor of a rendered page.
#[derive(Debug, Serialize, ToSchema)]
pub struct PageResponse {
    pub page: String,
    /// Unprefixed page path
    pub path: String,
    /// Active language code
    pub language: String,
    pub is_authenticated: bool,
    pub effective_role: Option<Role>,
    pub is_viewing_as: bool,
}

impl PageResponse {
    pub fn new(page: &str, path: &str, language: String, auth: &AuthState) -> Self {
        Self {
            page: page.to_string(),
            path: path.to_string(),
            language,
            is_authenticated: auth.is_authenticated(),
            effective_role: auth.effective_role(),
            is_viewing_as: auth.is_viewing_as(),
        }
    }
}
