//! # Campusgate
//!
//! Route access control for the campus learning platform front-end, served
//! as an Axum application.
//!
//! ## Overview
//!
//! Every navigable page is guarded by a chain of gates that decide between
//! three outcomes: keep waiting (`Loading`), send the visitor elsewhere
//! (`Redirect`), or show the page (`Render`).
//!
//! - **Protected gate**: signed-in users only, optionally restricted by role
//! - **Guest gate**: signed-out visitors only (sign-in and registration)
//! - **Feature gate**: pages behind a runtime feature flag
//! - **Language gate**: validates the `/{language}` path segment
//!
//! Authorization always uses the *effective role*: administrators may preview
//! the platform as another role, and that override is ignored for everybody
//! else.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/             # Offline decision and token helpers for campusgate-cli
//! ├── guards/          # Gate decision functions and gate wrappers
//! ├── middleware/      # Session extractors, page and language gate middleware
//! ├── modules/         # HTTP modules
//! │   ├── pages/       # Page descriptors behind the gates
//! │   ├── session/     # Session state and admin view-as switching
//! │   ├── sidebar/     # Persisted sidebar group state
//! │   └── features/    # Feature flag listing
//! ├── providers/       # Feature flag and localization providers
//! ├── sidebar/         # Sidebar categories and key-value storage
//! ├── routes.rs        # Page table
//! ├── router.rs        # Main application router
//! └── state.rs         # Shared application state
//! ```
//!
//! Workspace crates:
//!
//! - `campusgate-core`: roles, guard decisions, errors, route and feature names
//! - `campusgate-config`: environment-driven configuration
//! - `campusgate-auth`: JWT claims, auth state and the auth provider
//! - `campusgate-observability`: tracing, request logging and Prometheus metrics
//!
//! ## Decisions over HTTP
//!
//! | Decision | Response |
//! |----------|----------|
//! | `Render` | `200` with the page descriptor |
//! | `Redirect` (replace) | `303 See Other` |
//! | `Redirect` (push) | `307 Temporary Redirect` |
//! | `Loading` | `503` with `Retry-After: 1` |
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! FEATURE_FLAGS=courses,community,admin_dashboard
//! SUPPORTED_LANGUAGES=es,en,pt
//! DEFAULT_LANGUAGE=es
//! ```
//!
//! Mint a development token and inspect a decision:
//!
//! ```bash
//! cargo run --bin campusgate-cli -- issue-token --email ada@example.com --role admin
//! cargo run --bin campusgate-cli -- decide --path /en/admin/dashboard --role student
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod cli;
pub mod docs;
pub mod guards;
pub mod middleware;
pub mod modules;
pub mod providers;
pub mod router;
pub mod routes;
pub mod sidebar;
pub mod state;

// Re-export workspace crates for convenience
pub use campusgate_auth;
pub use campusgate_config;
pub use campusgate_core;
pub use campusgate_observability;
