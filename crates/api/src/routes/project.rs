//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                -> list            (?featured=true)
/// POST   /                -> create          (admin)
/// GET    /migrate         -> migrate_images  (admin)
/// POST   /image-urls      -> rewrite_image_urls (admin)
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update          (admin)
/// DELETE /{id}            -> delete          (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/migrate", get(project::migrate_images))
        .route("/image-urls", post(project::rewrite_image_urls))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
}
