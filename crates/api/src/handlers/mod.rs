//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the store in `kbase_store` and map errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod issues;
pub mod matching;
pub mod solutions;
pub mod topics;
