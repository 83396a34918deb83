//! # Campusgate Core
//!
//! Core types, errors, and guard decisions for Campusgate.
//!
//! This crate provides the vocabulary shared by every other Campusgate crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`roles`]: Platform roles, the admin "view as" override and role requirements
//! - [`decision`]: The tri-state [`GuardDecision`] produced by every gate
//! - [`routes`]: Well-known redirect targets used by the gates
//! - [`features`]: Feature flag names and the default enabled set
//!
//! # Example
//!
//! ```ignore
//! use campusgate_core::{GuardDecision, Role, RoleRequirement};
//!
//! let requirement = RoleRequirement::any_of([Role::Instructor, Role::Admin]);
//! assert!(requirement.is_satisfied_by(Role::Admin));
//! assert!(GuardDecision::Render.is_render());
//! ```

pub mod decision;
pub mod errors;
pub mod features;
pub mod roles;
pub mod routes;

// Re-export commonly used types at crate root
pub use decision::{DenialReason, GuardDecision, Redirect};
pub use errors::AppError;
pub use roles::{ParseRoleError, ParseViewAsError, Role, RoleRequirement, ViewAs};
