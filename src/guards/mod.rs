//! The route guard layer.
//!
//! Each gate is a pure function of the current provider state plus an
//! optional wrapper struct that reads that state from a provider at the moment
//! of evaluation:
//!
//! | Gate | Function | Wrapper |
//! |------|----------|---------|
//! | Protected (optionally role-restricted) | [`protected_decision`] | [`ProtectedGate`] |
//! | Guest-only | [`guest_decision`] | [`GuestGate`] |
//! | Feature flag | [`feature_decision`] | [`FeatureGate`] |
//! | Language segment | [`language_decision`] | [`LanguageGate`] |
//!
//! All gates follow the same state machine:
//!
//! ```text
//! Loading ──► Render
//!    │
//!    └──────► Redirect
//! ```
//!
//! Nothing is cached between evaluations, so a change in provider state
//! (logout, flags finishing to load) is reflected on the very next call.
//! Gates are chained with [`GuardDecision::and_then`](campusgate_core::GuardDecision::and_then).

pub mod feature;
pub mod guest;
pub mod language;
pub mod protected;

pub use feature::{FeatureGate, feature_decision};
pub use guest::{GuestGate, guest_decision};
pub use language::{LanguageGate, language_decision};
pub use protected::{ProtectedGate, protected_decision};
