//! Object storage for uploaded images.
//!
//! Handlers talk to an [`ObjectStore`] trait object; production wires in the
//! S3-compatible [`S3ObjectStore`] (Cloudflare R2), tests substitute an
//! in-memory fake.

pub mod s3;

use std::time::Duration;

pub use s3::{S3ObjectStore, StorageConfig};

/// Lifetime of a presigned download URL.
pub const PRESIGN_EXPIRY: Duration = Duration::from_secs(60 * 60);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for object storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The storage service rejected or failed the request.
    #[error("Object storage request failed: {0}")]
    Request(String),

    /// A presigned URL could not be produced.
    #[error("Presigning failed: {0}")]
    Presign(String),
}

// ---------------------------------------------------------------------------
// ObjectStore
// ---------------------------------------------------------------------------

/// A bucket of publicly served objects addressed by key.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `key` and return its public URL.
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str)
        -> Result<String, StorageError>;

    /// Remove the object stored under `key`. Missing keys are not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Produce a time-limited download URL for `key`.
    async fn presigned_get(&self, key: &str, expires_in: Duration)
        -> Result<String, StorageError>;
}
