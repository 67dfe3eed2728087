//! Video endpoints.
//!
//! GET /api/video?url=...
//! GET /api/video/quality?url=...&quality=480p

use axum::{
    extract::{Query, State},
    Json,
};

use crate::domains::video::{
    resolve_at_quality, resolve_direct_url, QualityVideoResponse, VideoError, VideoResponse,
};
use crate::server::app::AppState;

/// Raw query pairs in request order.
///
/// Each field is looked up on its own, so a repeated or odd `quality` never
/// hides a valid `url`. A repeated key takes its first value.
pub type QueryPairs = Option<Query<Vec<(String, String)>>>;

fn first_value<'a>(query: &'a QueryPairs, key: &str) -> Option<&'a str> {
    let Query(pairs) = query.as_ref()?;
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Best browser-playable direct URL for a video
pub async fn video_handler(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<VideoResponse>, VideoError> {
    resolve_direct_url(&state.deps, first_value(&query, "url"))
        .await
        .map(Json)
}

/// Direct URL capped at a quality tier (default 720p)
pub async fn quality_video_handler(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<QualityVideoResponse>, VideoError> {
    resolve_at_quality(
        &state.deps,
        first_value(&query, "url"),
        first_value(&query, "quality"),
    )
    .await
    .map(Json)
}
