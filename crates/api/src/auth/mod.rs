//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- session token generation, hashing, and cookie helpers.

pub mod password;
pub mod session;
