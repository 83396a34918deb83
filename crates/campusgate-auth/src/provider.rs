//! The auth provider.
//!
//! [`AuthProvider`] owns the session lifecycle and publishes every change
//! through a `tokio::sync::watch` channel. Gates never hold on to a snapshot:
//! they call [`AuthProvider::current`] each time they evaluate, and observers
//! that need to re-evaluate on change use [`AuthProvider::subscribe`].

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use campusgate_core::{AppError, Role, ViewAs};

use crate::claims::Claims;
use crate::state::{AuthState, SessionUser};

/// Session owner; clones share the same state.
#[derive(Debug, Clone)]
pub struct AuthProvider {
    state: Arc<watch::Sender<AuthState>>,
}

impl Default for AuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider {
    /// A provider whose session is still being restored.
    pub fn new() -> Self {
        let (state, _) = watch::channel(AuthState::loading());
        Self {
            state: Arc::new(state),
        }
    }

    /// A provider that starts from an already resolved state.
    pub fn resolved(state: AuthState) -> Self {
        let (state, _) = watch::channel(state);
        Self {
            state: Arc::new(state),
        }
    }

    pub fn current(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Finish session restoration with the verified claims, if any.
    pub fn bootstrap(&self, claims: Option<&Claims>) {
        let state = AuthState::from_claims(claims);
        info!(
            authenticated = state.is_authenticated(),
            "Session bootstrap complete"
        );
        self.state.send_replace(state);
    }

    pub fn login(&self, claims: &Claims) {
        info!(user_id = %claims.sub, role = %claims.role, "User signed in");
        self.state
            .send_replace(AuthState::authenticated(SessionUser::from(claims), ViewAs::Current));
    }

    /// Tear the session down: user cleared, override reset.
    pub fn logout(&self) {
        let previous = self.state.send_replace(AuthState::anonymous());
        if let Some(user) = previous.user {
            info!(user_id = %user.id, "User signed out");
        }
    }

    /// Switch the admin preview role.
    ///
    /// # Errors
    ///
    /// - Unauthorized when nobody is signed in
    /// - Forbidden when the signed-in user is not an administrator
    pub fn set_view_as_role(&self, view_as: ViewAs) -> Result<(), AppError> {
        let current = self.current();
        let user = current
            .user
            .as_ref()
            .ok_or_else(|| AppError::unauthorized("No active session".to_string()))?;

        if user.role != Role::Admin {
            warn!(user_id = %user.id, role = %user.role, requested = %view_as, "Rejected view-as switch");
            return Err(AppError::forbidden(
                "Access denied. Only administrators can switch the view-as role.".to_string(),
            ));
        }

        self.state.send_if_modified(|state| {
            if state.view_as_role == view_as {
                return false;
            }
            state.view_as_role = view_as;
            true
        });
        info!(user_id = %user.id, view_as = %view_as, "View-as role updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: Role) -> Claims {
        Claims {
            sub: "user-1".to_string(),
            email: "user@example.com".to_string(),
            role,
            view_as: ViewAs::Current,
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_new_provider_starts_loading() {
        let provider = AuthProvider::new();
        assert!(provider.current().is_loading);
    }

    #[test]
    fn test_bootstrap_resolves() {
        let provider = AuthProvider::new();
        provider.bootstrap(None);
        let state = provider.current();
        assert!(!state.is_loading);
        assert!(!state.is_authenticated());

        provider.bootstrap(Some(&claims(Role::Student)));
        assert_eq!(provider.current().effective_role(), Some(Role::Student));
    }

    #[test]
    fn test_admin_can_view_as() {
        let provider = AuthProvider::new();
        provider.login(&claims(Role::Admin));
        provider
            .set_view_as_role(ViewAs::Role(Role::Instructor))
            .unwrap();

        let state = provider.current();
        assert_eq!(state.user_role(), Some(Role::Admin));
        assert_eq!(state.effective_role(), Some(Role::Instructor));

        provider.set_view_as_role(ViewAs::Current).unwrap();
        assert_eq!(provider.current().effective_role(), Some(Role::Admin));
    }

    #[test]
    fn test_non_admin_cannot_view_as() {
        let provider = AuthProvider::new();
        provider.login(&claims(Role::Instructor));
        let err = provider
            .set_view_as_role(ViewAs::Role(Role::Admin))
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 403);
        assert_eq!(provider.current().view_as_role, ViewAs::Current);
    }

    #[test]
    fn test_view_as_requires_session() {
        let provider = AuthProvider::new();
        provider.bootstrap(None);
        let err = provider
            .set_view_as_role(ViewAs::Role(Role::Student))
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_logout_tears_down_override() {
        let provider = AuthProvider::new();
        provider.login(&claims(Role::Admin));
        provider
            .set_view_as_role(ViewAs::Role(Role::Student))
            .unwrap();
        provider.logout();

        let state = provider.current();
        assert!(!state.is_authenticated());
        assert_eq!(state.view_as_role, ViewAs::Current);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let provider = AuthProvider::new();
        let mut rx = provider.subscribe();
        assert!(rx.borrow().is_loading);

        provider.login(&claims(Role::Moderator));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().effective_role(), Some(Role::Moderator));

        provider.logout();
        rx.changed().await.unwrap();
        assert!(!rx.borrow().is_authenticated());
    }

    #[tokio::test]
    async fn test_setting_same_view_as_does_not_notify() {
        let provider = AuthProvider::new();
        provider.login(&claims(Role::Admin));
        let rx = provider.subscribe();

        provider.set_view_as_role(ViewAs::Current).unwrap();
        assert!(!rx.has_changed().unwrap());
    }
}
