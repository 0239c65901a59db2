use std::sync::Arc;

use kbase_store::{MemStore, SessionStore};

use crate::analyzer::ContentAnalyzer;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (all inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory entity store.
    pub store: Arc<MemStore>,
    /// Server-side login sessions.
    pub sessions: Arc<SessionStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Summarization collaborator (real client or static fallback).
    pub analyzer: Arc<dyn ContentAnalyzer>,
}
