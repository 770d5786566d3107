//! Handlers for the singleton `/about` document.

use axum::extract::State;
use axum::Json;
use portfolio_db::models::about::{About, UpdateAbout};
use portfolio_db::repositories::AboutRepo;

use crate::error::{AppJson, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// GET /api/about
///
/// The default document is created on first read.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<About>> {
    let about = AboutRepo::get_or_create(&state.pool).await?;
    Ok(Json(about))
}

/// PUT /api/about
pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateAbout>,
) -> AppResult<Json<About>> {
    let about = AboutRepo::upsert(&state.pool, &input).await?;
    tracing::info!(id = about.id, "About document updated");
    Ok(Json(about))
}

/// DELETE /api/about
///
/// Replace the document with the defaults and return the new one.
pub async fn reset(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<About>> {
    let about = AboutRepo::reset(&state.pool).await?;
    tracing::info!(id = about.id, "About document reset to defaults");
    Ok(Json(about))
}
