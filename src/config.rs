use anyhow::Context;

/// Process configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub jwt_secret: String,
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_endpoint: Option<String>,
    /// Base under which uploaded objects are publicly reachable. When unset
    /// it is derived from the endpoint (MinIO-style) or the bucket/region.
    pub s3_public_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `MONGODB_URI`, `JWT_SECRET` and `S3_BUCKET` are required; the process
    /// must not come up without them.
    pub fn from_env() -> anyhow::Result<Self> {
        let mongodb_uri = std::env::var("MONGODB_URI").context("MONGODB_URI is not set")?;
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?;
        let s3_bucket = std::env::var("S3_BUCKET").context("S3_BUCKET is not set")?;

        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            mongodb_uri,
            mongodb_database: std::env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "vitrine".to_string()),
            jwt_secret,
            s3_bucket,
            s3_region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            s3_endpoint: std::env::var("S3_ENDPOINT").ok(),
            s3_public_url: std::env::var("S3_PUBLIC_URL").ok(),
        })
    }
}
