use campusgate_auth::{AuthProvider, AuthState};
use campusgate_core::{DenialReason, GuardDecision, routes};

/// Decide access to a guest-only page (sign-in, registration).
pub fn guest_decision(auth: &AuthState) -> GuardDecision {
    if auth.is_loading {
        return GuardDecision::Loading;
    }
    if auth.is_authenticated() {
        return GuardDecision::redirect(routes::HOME, DenialReason::AlreadyAuthenticated);
    }
    GuardDecision::Render
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuestGate;

impl GuestGate {
    pub fn evaluate(&self, auth: &AuthProvider) -> GuardDecision {
        guest_decision(&auth.current())
    }
}
