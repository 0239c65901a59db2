//! Route definitions for solutions.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::solutions;
use crate::state::AppState;

/// Solution routes, mounted at `/solutions`.
///
/// ```text
/// POST   /                 -> create_solution
/// POST   /{id}/approve     -> approve_solution (admin only)
/// POST   /{id}/reject      -> reject_solution (admin only)
/// DELETE /{id}             -> delete_solution (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(solutions::create_solution))
        .route("/{id}", delete(solutions::delete_solution))
        .route("/{id}/approve", post(solutions::approve_solution))
        .route("/{id}/reject", post(solutions::reject_solution))
}
