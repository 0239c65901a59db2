//! Handlers for the `/topics` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use kbase_core::topic;
use kbase_store::models::{CreateTopic, Topic};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/topics
pub async fn list_topics(State(state): State<AppState>) -> Json<Vec<Topic>> {
    Json(state.store.list_topics())
}

/// POST /api/topics
///
/// Create a topic. Admin only.
pub async fn create_topic(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTopic>,
) -> AppResult<impl IntoResponse> {
    topic::validate(&input.name, input.description.as_deref())?;

    let created = state.store.create_topic(input);

    tracing::info!(
        topic_id = created.id,
        user_id = admin.user_id,
        "Topic created",
    );

    Ok((StatusCode::CREATED, Json(created)))
}
