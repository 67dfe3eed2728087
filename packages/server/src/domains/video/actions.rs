//! Video actions - validate, extract, shape.
//!
//! Each action makes at most one extractor call and never retries. Validation
//! failures return before the extractor is touched.

use media_extractor::{extract_video_id, ExtractOptions, FormatSelector, Quality, VideoId};
use tracing::{error, info, warn};

use super::{QualityVideoResponse, VideoError, VideoResponse};
use crate::kernel::ServerDeps;

/// Check that a URL was supplied and names a YouTube video.
pub fn validate_video_url(url: Option<&str>) -> Result<(&str, VideoId), VideoError> {
    let url = url
        .filter(|url| !url.is_empty())
        .ok_or(VideoError::MissingInput)?;
    let video_id = extract_video_id(url).ok_or(VideoError::UnrecognizedUrl)?;
    Ok((url, video_id))
}

/// Resolve the best browser-playable direct URL for a video.
///
/// Tool failures carry the extractor's message so callers can diagnose them.
pub async fn resolve_direct_url(
    deps: &ServerDeps,
    url: Option<&str>,
) -> Result<VideoResponse, VideoError> {
    info!(url = url.unwrap_or_default(), "Received video request");

    let (url, video_id) = validate_video_url(url)?;
    info!(video_id = %video_id, "Extracted video ID");

    let options = ExtractOptions::new(FormatSelector::browser_compatible())
        .prefer_free_formats()
        .skip_dash_manifest()
        .with_optional_cookies(deps.credentials.resolve().await);

    let media = deps.extractor.extract(url, &options).await.map_err(|e| {
        error!(video_id = %video_id, error = %e, "Video extraction failed");
        VideoError::ExtractionFailed {
            detail: Some(e.to_string()),
        }
    })?;

    info!(
        video_id = %video_id,
        title = media.title.as_deref().unwrap_or_default(),
        has_direct_url = media.direct_url().is_some(),
        "Video info extracted"
    );

    let Some(direct_url) = media.direct_url().map(str::to_string) else {
        warn!(video_id = %video_id, "Extractor returned no direct URL");
        return Err(VideoError::NoDirectUrl);
    };

    Ok(VideoResponse::new(video_id, direct_url, media))
}

/// Resolve a direct URL capped at the requested quality.
///
/// Unknown or missing labels resolve to 720p. Tool failures are reported
/// with the generic message only.
pub async fn resolve_at_quality(
    deps: &ServerDeps,
    url: Option<&str>,
    quality: Option<&str>,
) -> Result<QualityVideoResponse, VideoError> {
    let (url, video_id) = validate_video_url(url)?;

    let resolved = Quality::resolve(quality);
    info!(
        video_id = %video_id,
        requested = quality.unwrap_or_default(),
        quality = %resolved,
        "Received quality video request"
    );

    let options = ExtractOptions::new(resolved)
        .with_optional_cookies(deps.credentials.resolve().await);

    let media = deps.extractor.extract(url, &options).await.map_err(|e| {
        error!(video_id = %video_id, quality = %resolved, error = %e, "Video extraction failed");
        VideoError::ExtractionFailed { detail: None }
    })?;

    Ok(QualityVideoResponse::new(video_id, resolved, media))
}
