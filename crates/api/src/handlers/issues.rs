//! Handlers for the `/issues` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use kbase_core::error::CoreError;
use kbase_core::issue;
use kbase_core::types::DbId;
use kbase_store::models::{CreateIssue, Issue};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /api/issues`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueListParams {
    pub topic_id: Option<DbId>,
}

/// GET /api/issues?topicId=
pub async fn list_issues(
    State(state): State<AppState>,
    Query(params): Query<IssueListParams>,
) -> Json<Vec<Issue>> {
    Json(state.store.list_issues(params.topic_id))
}

/// GET /api/issues/{id}
pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Issue>> {
    let issue = state
        .store
        .get_issue(id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Issue", id }))?;
    Ok(Json(issue))
}

/// POST /api/issues
///
/// Create an issue. Open to any visitor. The content is run through the
/// summarization collaborator to extract key facts; if that call fails the
/// issue is still created, with an empty key-facts list.
pub async fn create_issue(
    State(state): State<AppState>,
    Json(input): Json<CreateIssue>,
) -> AppResult<impl IntoResponse> {
    issue::validate(&input.title, &input.description, &input.content)?;

    let key_facts = match state.analyzer.analyze(&input.content).await {
        Ok(analysis) => analysis.key_facts,
        Err(e) => {
            tracing::warn!(error = %e, "Content analysis failed; creating issue without key facts");
            Vec::new()
        }
    };

    let created = state.store.create_issue(input, key_facts)?;

    tracing::info!(
        issue_id = created.id,
        topic_id = created.topic_id,
        key_facts = created.key_facts.len(),
        "Issue created",
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/issues/{id}/approve
///
/// Mark an issue approved. Admin only; idempotent.
pub async fn approve_issue(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Issue>> {
    let issue = state.store.approve_issue(id)?;

    tracing::info!(issue_id = id, user_id = admin.user_id, "Issue approved");

    Ok(Json(issue))
}
