//! Route definitions.
//!
//! Each submodule mounts one resource's routes; [`api_routes`] assembles the
//! `/api` tree. Paths match the original client's expectations exactly.

pub mod auth;
pub mod health;
pub mod issues;
pub mod solutions;
pub mod topics;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/login                     login (public)
/// /auth/logout                    logout (requires session)
/// /auth/me                        current user (requires session)
///
/// /topics                         list (public), create (admin)
///
/// /issues                         list (public), create (public)
/// /issues/{id}                    get (public)
/// /issues/{id}/approve            approve (admin)
/// /issues/{issueId}/solutions     list, visibility-filtered by viewer role
///
/// /solutions                      create (public)
/// /solutions/{id}/approve         approve (admin)
/// /solutions/{id}/reject          reject (admin)
/// /solutions/{id}                 delete (admin)
///
/// /match-solutions                AI solution matching (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/topics", topics::router())
        .nest("/issues", issues::router())
        .nest("/solutions", solutions::router())
        .route("/match-solutions", post(handlers::matching::match_solutions))
}
