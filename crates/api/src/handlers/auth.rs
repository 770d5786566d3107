//! Handlers for the `/auth` resource (login, logout, session).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::{generate_session_token, ADMIN_ROLE};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppJson, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub email: String,
    pub role: &'static str,
}

/// Successful login: the token is also set as the session cookie.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Expiry as a UTC Unix timestamp.
    pub expires_at: i64,
    pub user: SessionUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: SessionUser,
    pub expires_at: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Check the admin credentials and open a session.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let (email, password) = match (input.email, input.password) {
        (Some(e), Some(p)) if !e.trim().is_empty() && !p.is_empty() => (e, p),
        _ => {
            return Err(AppError::BadRequest(
                "Email and password are required".into(),
            ))
        }
    };

    let admin = &state.config.admin;
    let email_matches = email.trim().eq_ignore_ascii_case(&admin.email);
    let password_valid = verify_password(&password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !(email_matches && password_valid) {
        tracing::warn!(email = %email.trim(), "Failed admin login");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let session = &state.config.session;
    let (token, expires_at) = generate_session_token(&admin.email, session)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let cookie = session_cookie(&token, session.expiry_secs(), session.cookie_secure);

    tracing::info!(email = %admin.email, "Admin logged in");
    Ok((
        [(SET_COOKIE, cookie)],
        Json(LoginResponse {
            token,
            expires_at,
            user: SessionUser {
                email: admin.email.clone(),
                role: ADMIN_ROLE,
            },
        }),
    ))
}

/// POST /api/auth/logout
///
/// Clear the session cookie. Tokens are stateless, so a bearer token stays
/// valid until it expires.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = clear_session_cookie(state.config.session.cookie_secure);
    (StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)])
}

/// GET /api/auth/session
pub async fn session(session: AdminSession) -> Json<SessionResponse> {
    Json(SessionResponse {
        user: SessionUser {
            email: session.email,
            role: ADMIN_ROLE,
        },
        expires_at: session.expires_at,
    })
}
