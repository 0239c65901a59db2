//! Route definitions for topics.

use axum::routing::get;
use axum::Router;

use crate::handlers::topics;
use crate::state::AppState;

/// Topic routes, mounted at `/topics`.
///
/// ```text
/// GET    /    -> list_topics
/// POST   /    -> create_topic (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(topics::list_topics).post(topics::create_topic))
}
