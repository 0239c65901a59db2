//! In-memory repository for the knowledge base.
//!
//! [`MemStore`] is the exclusive owner of all entity collections: one
//! lock-guarded table per entity type, each with its own auto-incrementing
//! id counter. Nothing persists across restarts; construct a store, seed it
//! via [`seed`], and hand it to the API layer at startup.
//!
//! [`sessions::SessionStore`] holds server-side login sessions keyed by
//! token digest.

pub mod models;
pub mod seed;
pub mod sessions;
pub mod store;

pub use sessions::SessionStore;
pub use store::MemStore;
