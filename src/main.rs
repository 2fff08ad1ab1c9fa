use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;

use vitrine::config::AppConfig;
use vitrine::routes;
use vitrine::state::AppState;
use vitrine::storage::S3BlobStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting vitrine server...");

    let config = AppConfig::from_env()?;

    let mongo_client = mongodb::Client::with_uri_str(&config.mongodb_uri)
        .await
        .context("Failed to connect to MongoDB")?;
    let db = mongo_client.database(&config.mongodb_database);
    tracing::info!("Connected to MongoDB database '{}'", config.mongodb_database);

    let blobs = Arc::new(S3BlobStore::from_config(&config).await);
    tracing::info!("Blob store ready (bucket '{}')", config.s3_bucket);

    let state = AppState::new(&db, blobs, config.jwt_secret.clone());

    // Per-IP limiter for the whole surface; the public contact form is the
    // reason this exists.
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(1)
            .burst_size(30)
            .finish()
            .context("Invalid rate limiter configuration")?,
    );

    let app = routes::router(state).layer(GovernorLayer::new(governor_config));

    tracing::info!("Listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {err}");
    }
}
