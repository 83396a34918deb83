//! Well-known navigation targets used by the gates.

/// Site root; also the landing page for the default language.
pub const ROOT: &str = "/";

/// Where guest-only pages send users who are already signed in.
pub const HOME: &str = "/";

/// Sign-in page for unauthenticated visitors.
pub const SIGN_IN: &str = "/login";

/// Shown when the effective role does not satisfy a route's requirement.
pub const UNAUTHORIZED: &str = "/unauthorized";

/// Default fallback of the feature gate.
pub const FEATURE_DISABLED: &str = "/feature-disabled";
