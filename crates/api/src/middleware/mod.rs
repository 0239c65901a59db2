//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from the session cookie.
//! - [`auth::MaybeAuthUser`] -- Optional variant; never rejects.
//! - [`rbac::RequireAdmin`] -- Requires `isAdmin`.

pub mod auth;
pub mod rbac;
