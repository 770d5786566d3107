pub mod about;
pub mod auth;
pub mod contact;
pub mod health;
pub mod project;
pub mod skill;
pub mod upload;

use axum::routing::get;
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                          service + database health
/// /diagnostics                     deployment snapshot
///
/// /auth/login                      open an admin session
/// /auth/logout                     clear the session cookie
/// /auth/session                    current session (admin)
///
/// /projects                        list, create
/// /projects/migrate                legacy image migration (admin)
/// /projects/image-urls             public URL prefix rewrite (admin)
/// /projects/{id}                   get, update, delete
///
/// /skills                          list, create
/// /skills/{id}                     get, update, delete
///
/// /about                           get, update, reset
/// /contact                         get, update, contact form
/// /send-email                      quick message
///
/// /upload                          upload, delete (admin)
/// /upload/presign                  presigned download URL (admin)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/diagnostics", get(handlers::diagnostics::diagnostics))
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/skills", skill::router())
        .nest("/about", about::router())
        .nest("/contact", contact::router())
        .nest("/send-email", contact::send_email_router())
        .nest("/upload", upload::router(config.max_upload_bytes))
}
