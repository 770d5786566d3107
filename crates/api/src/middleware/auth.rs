//! Session extractor for admin-only handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use portfolio_core::error::CoreError;

use crate::auth::cookie::{cookie_value, SESSION_COOKIE};
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Message returned with every 401.
pub const AUTH_REQUIRED: &str = "Authentication required";

/// The logged-in admin, proven by a valid session token.
///
/// The token is read from `Authorization: Bearer <token>` first and from the
/// `portfolio_session` cookie otherwise. Add it as a handler argument to
/// gate the handler:
///
/// ```ignore
/// async fn delete(_session: AdminSession, ...) -> AppResult<...> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,
    /// Expiry as a UTC Unix timestamp.
    pub expires_at: i64,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let unauthorized = || AppError::Core(CoreError::Unauthorized(AUTH_REQUIRED.into()));

        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        let token = bearer
            .or_else(|| cookie_value(&parts.headers, SESSION_COOKIE))
            .ok_or_else(unauthorized)?;

        let claims = validate_token(token, &state.config.session).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            unauthorized()
        })?;

        if claims.sub != state.config.admin.email {
            tracing::warn!(sub = %claims.sub, "Session token for unknown admin");
            return Err(unauthorized());
        }

        Ok(AdminSession {
            email: claims.sub,
            expires_at: claims.exp,
        })
    }
}
