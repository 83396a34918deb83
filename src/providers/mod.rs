//! State providers observed by the gates.
//!
//! - [`feature_flags`]: enabled feature set, loaded once at start-up
//! - [`localization`]: supported languages and the active language
//!
//! The auth provider lives in the `campusgate-auth` crate and is re-exported
//! here so gate code can import every provider from one place.
//!
//! Every provider is an explicit, cloneable handle over a
//! `tokio::sync::watch` channel; there are no process-wide singletons. Each
//! one starts in its loading state (where it has one), so a gate always sees
//! Loading before it can produce a Redirect.

pub mod feature_flags;
pub mod localization;

pub use campusgate_auth::{AuthProvider, AuthState};
pub use feature_flags::{FeatureFlagProvider, FeatureFlagState};
pub use localization::LocalizationProvider;
