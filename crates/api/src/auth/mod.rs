//! Authentication primitives for the single admin account.
//!
//! - [`password`]: Argon2id password hashing and verification.
//! - [`jwt`]: session token generation and validation.
//! - [`cookie`]: the session cookie carrying the token to browsers.

pub mod cookie;
pub mod jwt;
pub mod password;
