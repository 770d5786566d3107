//! Request extractors guarding admin routes.
//!
//! - [`auth::AdminSession`]: requires a valid session cookie or bearer token.

pub mod auth;
