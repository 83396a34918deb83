//! Request middleware and extractors.
//!
//! - [`auth`]: session token parsing, the [`auth::Session`] and
//!   [`auth::AuthUser`] extractors
//! - [`gate`]: page and language gates applied with
//!   `axum::middleware::from_fn_with_state`
//!
//! # Page gating
//!
//! Each page route carries a [`gate::page_gate`] layer bound to its
//! [`crate::routes::PageRoute`]. Pages mounted under `/{language}` also pass
//! through [`gate::language_gate`] first, which activates the language so the
//! page gate can localize its redirects.

pub mod auth;
pub mod gate;
