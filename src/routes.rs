//! Page table.
//!
//! Every navigable page and the gates guarding it are declared once in
//! [`page_routes`]. The HTTP router and the CLI both evaluate pages through
//! [`PageRoute::evaluate`], so they cannot disagree about who sees what.
//!
//! Gates are chained access first, feature second: an anonymous visitor is
//! sent to sign-in before learning whether a feature is switched on.

use campusgate_auth::AuthState;
use campusgate_core::{GuardDecision, Role, RoleRequirement, features};

use crate::guards::{feature_decision, guest_decision, protected_decision};
use crate::providers::FeatureFlagState;

/// Who may open a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Public,
    GuestOnly,
    /// Signed-in users, optionally restricted by effective role.
    Authenticated(Option<RoleRequirement>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    pub path: &'static str,
    pub page: &'static str,
    pub access: Access,
    pub feature: Option<&'static str>,
}

impl PageRoute {
    fn new(path: &'static str, page: &'static str, access: Access) -> Self {
        Self {
            path,
            page,
            access,
            feature: None,
        }
    }

    fn feature(mut self, feature: &'static str) -> Self {
        self.feature = Some(feature);
        self
    }

    /// Name of the access gate, used as a log and metrics label.
    pub fn gate_name(&self) -> &'static str {
        match (&self.access, self.feature) {
            (Access::Public, None) => "public",
            (Access::Public, Some(_)) => "feature",
            (Access::GuestOnly, _) => "guest",
            (Access::Authenticated(None), _) => "protected",
            (Access::Authenticated(Some(_)), _) => "role",
        }
    }

    pub fn evaluate(&self, auth: &AuthState, flags: &FeatureFlagState) -> GuardDecision {
        let access = match &self.access {
            Access::Public => GuardDecision::Render,
            Access::GuestOnly => guest_decision(auth),
            Access::Authenticated(requirement) => protected_decision(auth, requirement.as_ref()),
        };

        access.and_then(|| match self.feature {
            Some(feature) => feature_decision(flags, feature, None),
            None => GuardDecision::Render,
        })
    }
}

pub fn page_routes() -> Vec<PageRoute> {
    let signed_in = || Access::Authenticated(None);
    let only = |roles: &[Role]| Access::Authenticated(Some(RoleRequirement::any_of(roles.iter().copied())));

    vec![
        PageRoute::new("/", "home", Access::Public),
        PageRoute::new("/login", "login", Access::GuestOnly),
        PageRoute::new("/register", "register", Access::GuestOnly),
        PageRoute::new("/unauthorized", "unauthorized", Access::Public),
        PageRoute::new("/feature-disabled", "feature_disabled", Access::Public),
        PageRoute::new("/courses", "courses", Access::Public).feature(features::COURSES),
        PageRoute::new("/dashboard", "dashboard", signed_in()),
        PageRoute::new("/certificates", "certificates", signed_in())
            .feature(features::CERTIFICATES),
        PageRoute::new("/community", "community", signed_in()).feature(features::COMMUNITY),
        PageRoute::new("/checkout", "checkout", signed_in()).feature(features::PAYMENTS),
        PageRoute::new(
            "/instructor/dashboard",
            "instructor_dashboard",
            only(&[Role::Instructor, Role::Admin]),
        )
        .feature(features::INSTRUCTOR_DASHBOARD),
        PageRoute::new("/moderation", "moderation", only(&[Role::Moderator, Role::Admin]))
            .feature(features::MODERATION),
        PageRoute::new(
            "/admin/dashboard",
            "admin_dashboard",
            Access::Authenticated(Some(RoleRequirement::Single(Role::Admin))),
        )
        .feature(features::ADMIN_DASHBOARD),
    ]
}

/// Look up a page by its unprefixed path (trailing slashes ignored).
pub fn find_page(path: &str) -> Option<PageRoute> {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    page_routes().into_iter().find(|route| route.path == normalized)
}
