//! Handlers for the `/auth` resource (login, logout, me).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use kbase_core::error::CoreError;
use kbase_core::types::DbId;
use kbase_store::models::User;

use crate::auth::password::verify_password;
use crate::auth::session::{clear_session_cookie, generate_session_token, session_cookie};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public user projection. The password hash never leaves the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub is_admin: bool,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// Response body for `POST /api/auth/logout`.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with username + password. Establishes a server-side session
/// and sets the session cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = state
        .store
        .find_user_by_username(&input.username)
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let (token, token_hash) = generate_session_token();
    state.sessions.insert(token_hash, user.id);

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok((
        [(SET_COOKIE, session_cookie(&token))],
        Json(UserInfo::from(&user)),
    ))
}

/// POST /api/auth/logout
///
/// Revoke the current session and expire the cookie.
pub async fn logout(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    state.sessions.revoke(&user.session_hash);

    tracing::info!(user_id = user.user_id, "User logged out");

    Ok((
        [(SET_COOKIE, clear_session_cookie())],
        Json(LogoutResponse { success: true }),
    ))
}

/// GET /api/auth/me
///
/// The currently authenticated user, for session restoration on page load.
pub async fn me(user: AuthUser) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.user_id,
        username: user.username,
        is_admin: user.is_admin,
    })
}
