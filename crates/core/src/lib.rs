//! Domain types, errors, and validation rules for the knowledge base.
//!
//! This crate has no I/O: it defines the error taxonomy ([`error::CoreError`]),
//! shared id/timestamp types, field-level validation helpers, and the
//! solution moderation state machine. The store and API crates build on it.

pub mod error;
pub mod issue;
pub mod moderation;
pub mod topic;
pub mod types;
pub mod validation;
