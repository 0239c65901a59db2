//! Route definitions for issues.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{issues, solutions};
use crate::state::AppState;

/// Issue routes, mounted at `/issues`.
///
/// ```text
/// GET    /                  -> list_issues (?topicId= filter)
/// POST   /                  -> create_issue
/// GET    /{id}              -> get_issue
/// POST   /{id}/approve      -> approve_issue (admin only)
/// GET    /{id}/solutions    -> list_for_issue (visibility-filtered)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(issues::list_issues).post(issues::create_issue))
        .route("/{id}", get(issues::get_issue))
        .route("/{id}/approve", post(issues::approve_issue))
        .route("/{id}/solutions", get(solutions::list_for_issue))
}
