//! Domain primitives shared by the portfolio backend crates.
//!
//! Nothing in here touches the database, the network or the filesystem:
//! - [`error`] -- the domain error type mapped to HTTP statuses by the API.
//! - [`types`] -- id and timestamp aliases.
//! - [`validation`] -- required-field and length checks for incoming documents.
//! - [`upload`] -- object naming and URL helpers for image uploads.
//! - [`content`] -- About page sections and default singleton content.

pub mod content;
pub mod error;
pub mod types;
pub mod upload;
pub mod validation;
