pub mod about;
pub mod auth;
pub mod contact;
pub mod diagnostics;
pub mod project;
pub mod skill;
pub mod upload;

use serde::Serialize;

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
