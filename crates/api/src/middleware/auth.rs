//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use kbase_core::error::CoreError;
use kbase_core::types::DbId;

use crate::auth::session::{hash_session_token, session_token_from_headers};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `kb_session` cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub username: String,
    pub is_admin: bool,
    /// Digest of the session token backing this request (used by logout).
    pub session_hash: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token_from_headers(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
        })?;

        let session_hash = hash_session_token(&token);
        let session = state.sessions.resolve(&session_hash).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        // Users are never deleted, but a session must not outlive its user.
        let user = state.store.get_user(session.user_id).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
        })?;

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
            is_admin: user.is_admin,
            session_hash,
        })
    }
}

/// Optional authentication: resolves to `Some(AuthUser)` for a valid session
/// and `None` otherwise, without ever rejecting the request.
///
/// Used by endpoints whose response shape depends on the viewer, such as
/// solution listing (admins see unmoderated solutions, everyone else does not).
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}

impl MaybeAuthUser {
    /// Whether the viewer is an authenticated admin.
    pub fn is_admin(&self) -> bool {
        self.0.as_ref().is_some_and(|u| u.is_admin)
    }
}
