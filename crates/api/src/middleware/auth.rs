//! JWT-based admin authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use courseware_core::error::CoreError;
use courseware_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Every admin handler takes this as an extractor parameter, so the
/// capability to perform admin operations is carried per-request rather
/// than held in any ambient session state:
///
/// ```ignore
/// async fn delete_subject(admin: AdminUser, ...) -> AppResult<StatusCode> {
///     tracing::info!(user_id = admin.user_id, "subject deleted");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's login name.
    pub username: String,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AdminUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}
