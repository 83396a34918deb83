use campusgate_auth::{AuthProvider, AuthState};
use campusgate_core::{DenialReason, GuardDecision, RoleRequirement, routes};

/// Decide access to an authenticated page.
///
/// Loading wins over everything else so no redirect fires while the session
/// is still being restored. Unauthenticated visitors go to sign-in; signed-in
/// users whose effective role misses the requirement go to the unauthorized
/// page instead.
pub fn protected_decision(auth: &AuthState, requirement: Option<&RoleRequirement>) -> GuardDecision {
    if auth.is_loading {
        return GuardDecision::Loading;
    }

    let Some(role) = auth.effective_role() else {
        return GuardDecision::redirect(routes::SIGN_IN, DenialReason::Unauthenticated);
    };

    match requirement {
        Some(requirement) if !requirement.is_satisfied_by(role) => {
            GuardDecision::redirect(routes::UNAUTHORIZED, DenialReason::Unauthorized)
        }
        _ => GuardDecision::Render,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedGate {
    requirement: Option<RoleRequirement>,
}

impl ProtectedGate {
    /// Any signed-in user.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requiring(requirement: impl Into<RoleRequirement>) -> Self {
        Self {
            requirement: Some(requirement.into()),
        }
    }

    pub fn requirement(&self) -> Option<&RoleRequirement> {
        self.requirement.as_ref()
    }

    pub fn evaluate(&self, auth: &AuthProvider) -> GuardDecision {
        protected_decision(&auth.current(), self.requirement.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusgate_auth::{Claims, SessionUser};
    use campusgate_core::{Role, ViewAs};

    fn signed_in(role: Role, view_as: ViewAs) -> AuthState {
        AuthState::authenticated(
            SessionUser {
                id: "user-1".to_string(),
                email: "user@example.com".to_string(),
                role,
            },
            view_as,
        )
    }

    #[test]
    fn test_loading_never_redirects() {
        let mut state = signed_in(Role::Student, ViewAs::Current);
        state.is_loading = true;
        let requirement = RoleRequirement::Single(Role::Admin);
        assert!(protected_decision(&state, Some(&requirement)).is_loading());
        assert!(protected_decision(&AuthState::loading(), None).is_loading());
    }

    #[test]
    fn test_anonymous_redirects_to_sign_in() {
        let decision = protected_decision(&AuthState::anonymous(), None);
        assert_eq!(decision.redirect_target(), Some("/login"));
    }

    #[test]
    fn test_role_mismatch_redirects_to_unauthorized() {
        let state = signed_in(Role::Student, ViewAs::Current);
        let requirement = RoleRequirement::Single(Role::Admin);
        let decision = protected_decision(&state, Some(&requirement));
        assert_eq!(decision.redirect_target(), Some("/unauthorized"));
    }

    #[test]
    fn test_view_as_applies_to_requirement() {
        let state = signed_in(Role::Admin, ViewAs::Role(Role::Student));
        let admin_only = RoleRequirement::Single(Role::Admin);
        assert_eq!(
            protected_decision(&state, Some(&admin_only)).redirect_target(),
            Some("/unauthorized")
        );

        let students = RoleRequirement::Single(Role::Student);
        assert!(protected_decision(&state, Some(&students)).is_render());
    }

    #[test]
    fn test_gate_reads_provider_on_every_evaluation() {
        let provider = AuthProvider::new();
        let gate = ProtectedGate::requiring(RoleRequirement::any_of([Role::Instructor, Role::Admin]));
        assert!(gate.evaluate(&provider).is_loading());

        provider.login(&Claims {
            sub: "user-1".to_string(),
            email: "teach@example.com".to_string(),
            role: Role::Instructor,
            view_as: ViewAs::Current,
            exp: 9999999999,
            iat: 1234567890,
        });
        assert!(gate.evaluate(&provider).is_render());

        provider.logout();
        assert_eq!(gate.evaluate(&provider).redirect_target(), Some("/login"));
    }
}
