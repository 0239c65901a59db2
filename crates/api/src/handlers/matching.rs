//! Handler for `/match-solutions` (AI-suggested candidate solutions).

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use kbase_core::issue::MAX_BODY_LENGTH;
use kbase_core::validation::FieldErrors;

use crate::analyzer::SolutionMatches;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/match-solutions`.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub description: String,
}

/// POST /api/match-solutions
///
/// Ask the collaborator for candidate solutions to a free-text description.
/// Unlike issue creation there is no fallback here: if the collaborator
/// fails, the client gets a 500 and can retry.
pub async fn match_solutions(
    State(state): State<AppState>,
    Json(input): Json<MatchRequest>,
) -> AppResult<Json<SolutionMatches>> {
    let mut errors = FieldErrors::new();
    errors.require("description", &input.description);
    errors.max_len("description", &input.description, MAX_BODY_LENGTH);
    errors.into_result()?;

    let matches = state
        .analyzer
        .match_solutions(&input.description)
        .await
        .map_err(|e| AppError::InternalError(format!("Solution matching failed: {e}")))?;

    Ok(Json(matches))
}
