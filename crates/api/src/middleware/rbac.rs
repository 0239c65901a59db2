//! Role-based access control extractor.
//!
//! Moderation endpoints (approve/reject/delete solutions, approve issues,
//! create topics) require the admin flag. Wrapping [`AuthUser`] in an
//! extractor enforces this at the type level in route handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use kbase_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an authenticated admin. Rejects with 403 Forbidden otherwise
/// (401 if there is no valid session at all).
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin privileges required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
