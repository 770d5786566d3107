use axum::routing::get;
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

/// Routes mounted at `/about`.
///
/// ```text
/// GET    /    -> get      (creates defaults on first read)
/// PUT    /    -> update   (admin)
/// DELETE /    -> reset    (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(about::get).put(about::update).delete(about::reset),
    )
}
