//! Auth state snapshots.

use campusgate_core::roles::effective_role;
use campusgate_core::{Role, ViewAs};

use crate::claims::Claims;

/// The signed-in user as seen by the gates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl From<&Claims> for SessionUser {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.sub.clone(),
            email: claims.email.clone(),
            role: claims.role,
        }
    }
}

/// Snapshot of the session at one point in time.
///
/// `is_authenticated`, `user_role` and `effective_role` are derived on read,
/// so the view-as invariant holds for every snapshot no matter how it was
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub is_loading: bool,
    pub user: Option<SessionUser>,
    pub view_as_role: ViewAs,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}

impl AuthState {
    /// Session restoration still in flight.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            user: None,
            view_as_role: ViewAs::Current,
        }
    }

    /// Resolved, nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            is_loading: false,
            user: None,
            view_as_role: ViewAs::Current,
        }
    }

    pub fn authenticated(user: SessionUser, view_as_role: ViewAs) -> Self {
        Self {
            is_loading: false,
            user: Some(user),
            view_as_role,
        }
    }

    /// Resolved state for verified claims, or anonymous when there are none.
    pub fn from_claims(claims: Option<&Claims>) -> Self {
        match claims {
            Some(claims) => Self::authenticated(SessionUser::from(claims), claims.view_as),
            None => Self::anonymous(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Role used for authorization after the admin override.
    pub fn effective_role(&self) -> Option<Role> {
        self.user_role()
            .map(|role| effective_role(role, self.view_as_role))
    }

    /// True when an administrator is previewing another role.
    pub fn is_viewing_as(&self) -> bool {
        matches!(
            (self.user_role(), self.view_as_role),
            (Some(Role::Admin), ViewAs::Role(role)) if role != Role::Admin
        )
    }
}
