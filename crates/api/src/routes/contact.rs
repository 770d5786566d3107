//! Contact details and the visitor email forms.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// GET    /    -> get      (creates defaults on first read)
/// PUT    /    -> update   (admin)
/// POST   /    -> submit   (contact form email)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(contact::get).put(contact::update).post(contact::submit),
    )
}

/// Route mounted at `/send-email`.
///
/// ```text
/// POST   /    -> send_quick_message
/// ```
pub fn send_email_router() -> Router<AppState> {
    Router::new().route("/", post(contact::send_quick_message))
}
