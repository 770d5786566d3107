//! S3-compatible implementation of [`ObjectStore`].

use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use portfolio_core::upload::public_url;

use crate::{ObjectStore, StorageError};

/// Region used when `R2_REGION` is unset. R2 ignores it but SigV4 needs one.
const DEFAULT_REGION: &str = "auto";

// ---------------------------------------------------------------------------
// StorageConfig
// ---------------------------------------------------------------------------

/// Connection settings for the S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    /// Base URL objects are publicly served from.
    pub public_url: String,
    pub region: String,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless the endpoint, both keys, the bucket and the
    /// public URL are all set; uploads are then unavailable.
    ///
    /// | Variable               | Required | Default |
    /// |------------------------|----------|---------|
    /// | `R2_ENDPOINT`          | yes      |         |
    /// | `R2_ACCESS_KEY_ID`     | yes      |         |
    /// | `R2_SECRET_ACCESS_KEY` | yes      |         |
    /// | `R2_BUCKET`            | yes      |         |
    /// | `R2_PUBLIC_URL`        | yes      |         |
    /// | `R2_REGION`            | no       | `auto`  |
    pub fn from_env() -> Option<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Some(Self {
            endpoint: var("R2_ENDPOINT")?,
            access_key_id: var("R2_ACCESS_KEY_ID")?,
            secret_access_key: var("R2_SECRET_ACCESS_KEY")?,
            bucket: var("R2_BUCKET")?,
            public_url: var("R2_PUBLIC_URL")?,
            region: var("R2_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// S3ObjectStore
// ---------------------------------------------------------------------------

/// Stores objects in a single bucket using path-style addressing.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    public_url: String,
}

impl S3ObjectStore {
    /// Build a client for the configured endpoint with static credentials.
    pub async fn new(config: StorageConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id,
            config.secret_access_key,
            None,
            None,
            "portfolio-storage",
        );
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(config.endpoint)
            .region(Region::new(config.region))
            .credentials_provider(credentials)
            .load()
            .await;
        let s3_config = aws_sdk_s3::config::Builder::from(&shared)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket,
            public_url: config.public_url,
        }
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Request(DisplayErrorContext(e).to_string()))?;

        tracing::info!(key, size, content_type, "Object stored");
        Ok(public_url(&self.public_url, key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Request(DisplayErrorContext(e).to_string()))?;

        tracing::info!(key, "Object deleted");
        Ok(())
    }

    async fn presigned_get(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StorageError::Presign(e.to_string()))?;
        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Presign(DisplayErrorContext(e).to_string()))?;
        Ok(request.uri().to_string())
    }
}
