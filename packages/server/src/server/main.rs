// Main entry point for the media relay API server

use anyhow::{Context, Result};
use relay_core::{server::build_app, kernel::ServerDeps, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,relay_core=debug,media_extractor=debug,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting media relay API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        ytdlp = %config.ytdlp_path.display(),
        timeout_secs = config.extraction_timeout.as_secs(),
        max_concurrent_extractions = ?config.max_concurrent_extractions,
        "Configuration loaded"
    );

    // The relay still starts without yt-dlp; every extraction will fail until it is installed
    match which::which(&config.ytdlp_path) {
        Ok(path) => tracing::info!(path = %path.display(), "Found yt-dlp"),
        Err(e) => tracing::warn!(
            ytdlp = %config.ytdlp_path.display(),
            error = %e,
            "yt-dlp not found; extractions will fail"
        ),
    }

    if config.cookies_path.is_file() {
        tracing::info!("Credential file present; extractions will use it");
    } else {
        tracing::info!("No credential file; extracting anonymously");
    }

    // Build application
    let app = build_app(ServerDeps::from_config(&config));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);
    tracing::info!(
        "Video API: http://localhost:{}/api/video?url=YOUTUBE_URL",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
