//! Route definitions for `/upload`.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/upload`, all admin-only.
///
/// ```text
/// POST   /          -> upload    (multipart `file`)
/// DELETE /          -> delete    ({url} or {key})
/// GET    /presign   -> presign   (?key=)
/// ```
///
/// Request bodies are capped at `max_upload_bytes`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload).delete(upload::delete))
        .route("/presign", get(upload::presign))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
