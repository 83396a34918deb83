use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use campusgate_auth::AuthState;
use campusgate_core::Role;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionUserResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// The session as the gates see it.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub is_authenticated: bool,
    pub user: Option<SessionUserResponse>,
    /// `current` or a role name
    #[schema(example = "current")]
    pub view_as_role: String,
    pub effective_role: Option<Role>,
    pub is_viewing_as: bool,
}

impl From<&AuthState> for SessionResponse {
    fn from(auth: &AuthState) -> Self {
        Self {
            is_authenticated: auth.is_authenticated(),
            user: auth.user.as_ref().map(|user| SessionUserResponse {
                id: user.id.clone(),
                email: user.email.clone(),
                role: user.role,
            }),
            view_as_role: auth.view_as_role.to_string(),
            effective_role: auth.effective_role(),
            is_viewing_as: auth.is_viewing_as(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ViewAsRequest {
    /// `current` to clear the override, or a role name
    #[schema(example = "instructor")]
    pub view_as: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ViewAsResponse {
    pub access_token: String,
    pub session: SessionResponse,
}
