//! Blob storage behind a trait so tests can run without a real S3 instance.

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::AppError;

/// S3-compatible blob store for uploaded assets.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `key` and return the public URL.
    ///
    /// Failures here are fatal to the enclosing request: the caller must not
    /// touch the document's asset reference when the upload did not land.
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError>;

    /// Remove the object a previously returned URL points at.
    async fn delete(&self, url: &str) -> Result<(), AppError>;
}

/// Best-effort delete. `None` is a no-op; failures are logged and swallowed.
///
/// An orphaned blob is an acceptable failure mode — a delete that cannot go
/// through must never fail the update or deletion that triggered it.
pub async fn discard(store: &dyn BlobStore, url: Option<&str>) {
    let Some(url) = url else { return };
    if let Err(err) = store.delete(url).await {
        tracing::warn!("Blob deletion failed for {url}: {err}");
    }
}

/// S3 implementation of [`BlobStore`].
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    /// URL prefix under which objects in the bucket are publicly reachable.
    public_base: String,
}

impl S3BlobStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, public_base: String) -> Self {
        Self {
            client,
            bucket,
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from the loaded configuration. A custom endpoint
    /// (MinIO, LocalStack) switches the SDK to path-style addressing.
    pub async fn from_config(config: &AppConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.s3_region.clone()));
        if let Some(endpoint) = &config.s3_endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        let client = if config.s3_endpoint.is_some() {
            aws_sdk_s3::Client::from_conf(
                aws_sdk_s3::config::Builder::from(&sdk_config)
                    .force_path_style(true)
                    .build(),
            )
        } else {
            aws_sdk_s3::Client::new(&sdk_config)
        };

        let public_base = match (&config.s3_public_url, &config.s3_endpoint) {
            (Some(base), _) => base.clone(),
            (None, Some(endpoint)) => {
                format!("{}/{}", endpoint.trim_end_matches('/'), config.s3_bucket)
            }
            (None, None) => format!(
                "https://{}.s3.{}.amazonaws.com",
                config.s3_bucket, config.s3_region
            ),
        };

        Self::new(client, config.s3_bucket.clone(), public_base)
    }

    fn key_for(&self, url: &str) -> Result<String, AppError> {
        url.strip_prefix(&self.public_base)
            .map(|rest| rest.trim_start_matches('/').to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Storage(format!("URL outside the blob namespace: {url}")))
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(bytes.into())
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to put object '{key}': {e}")))?;

        Ok(format!("{}/{}", self.public_base, key))
    }

    async fn delete(&self, url: &str) -> Result<(), AppError> {
        let key = self.key_for(url)?;
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to delete object '{key}': {e}")))?;
        Ok(())
    }
}
