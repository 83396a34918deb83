//! # Campusgate Auth
//!
//! Session state and the auth provider for Campusgate.
//!
//! This crate provides:
//!
//! - [`claims`]: JWT claim structure carried by session tokens
//! - [`jwt`]: Token creation and verification utilities
//! - [`state`]: [`AuthState`], the snapshot every gate reads
//! - [`provider`]: [`AuthProvider`], the owner of the session lifecycle
//!
//! # Session Lifecycle
//!
//! ```text
//! AuthProvider::new()      -> loading (no gate may redirect yet)
//!     bootstrap(claims)    -> authenticated or anonymous
//!     login(claims)        -> authenticated
//!     set_view_as_role(..) -> admin preview as another role
//!     logout()             -> anonymous, override reset
//! ```
//!
//! # Example
//!
//! ```ignore
//! use campusgate_auth::{AuthProvider, verify_token};
//!
//! let provider = AuthProvider::new();
//! let claims = verify_token(&token, &jwt_config).ok();
//! provider.bootstrap(claims.as_ref());
//!
//! let state = provider.current();
//! println!("effective role: {:?}", state.effective_role());
//! ```

pub mod claims;
pub mod jwt;
pub mod provider;
pub mod state;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, create_session_token, verify_token};
pub use provider::AuthProvider;
pub use state::{AuthState, SessionUser};
