//! Handlers for the `/solutions` resource and issue-scoped solution listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use kbase_core::error::CoreError;
use kbase_core::moderation;
use kbase_core::types::DbId;
use kbase_store::models::{CreateSolution, Solution};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Response body for `DELETE /api/solutions/{id}`.
///
/// The delete endpoint keeps its historical `{success, message}` contract so
/// the client can distinguish a missing record from an unexpected failure.
#[derive(Debug, Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
}

/// GET /api/issues/{issueId}/solutions
///
/// Solutions for an issue. Admins see every moderation state; everyone else
/// (including anonymous visitors) only sees approved solutions. The filter
/// is applied here, server-side, regardless of what the client hides.
pub async fn list_for_issue(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Path(issue_id): Path<DbId>,
) -> AppResult<Json<Vec<Solution>>> {
    if state.store.get_issue(issue_id).is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Issue",
            id: issue_id,
        }));
    }

    let mut solutions = state.store.list_solutions(issue_id);
    if !viewer.is_admin() {
        solutions.retain(|s| s.moderation_state().visible_to_public());
    }
    Ok(Json(solutions))
}

/// POST /api/solutions
///
/// Propose a solution against an issue. Open to any visitor; starts pending.
pub async fn create_solution(
    State(state): State<AppState>,
    Json(input): Json<CreateSolution>,
) -> AppResult<impl IntoResponse> {
    moderation::validate(&input.title, &input.content, &input.source)?;

    let created = state.store.create_solution(input)?;

    tracing::info!(
        solution_id = created.id,
        issue_id = created.issue_id,
        "Solution created",
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/solutions/{id}/approve
///
/// Transition a solution to approved. Admin only; idempotent.
pub async fn approve_solution(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Solution>> {
    let solution = state.store.approve_solution(id)?;

    tracing::info!(solution_id = id, user_id = admin.user_id, "Solution approved");

    Ok(Json(solution))
}

/// POST /api/solutions/{id}/reject
///
/// Transition a solution to rejected. Admin only; always clears the
/// approved flag so the two moderation flags stay mutually exclusive.
pub async fn reject_solution(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Solution>> {
    let solution = state.store.reject_solution(id)?;

    tracing::info!(solution_id = id, user_id = admin.user_id, "Solution rejected");

    Ok(Json(solution))
}

/// DELETE /api/solutions/{id}
///
/// Remove a solution from any moderation state. Admin only.
pub async fn delete_solution(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match state.store.delete_solution(id) {
        Ok(()) => {
            tracing::info!(solution_id = id, user_id = admin.user_id, "Solution deleted");
            Ok((
                StatusCode::OK,
                Json(DeleteOutcome {
                    success: true,
                    message: "Solution deleted successfully".into(),
                }),
            ))
        }
        Err(CoreError::NotFound { .. }) => Ok((
            StatusCode::NOT_FOUND,
            Json(DeleteOutcome {
                success: false,
                message: format!("Solution {id} not found"),
            }),
        )),
        Err(e) => Err(e.into()),
    }
}
