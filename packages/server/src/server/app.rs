//! Application setup and server configuration.

use std::sync::Arc;

use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{health_handler, quality_video_handler, video_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// Dependencies are passed in rather than read from globals, so tests can
/// hand in a mock extractor and a throwaway credential path.
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AppState {
        deps: Arc::new(deps),
    };

    // CORS configuration - allow any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/api/video", get(video_handler))
        .route("/api/video/quality", get(quality_video_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
