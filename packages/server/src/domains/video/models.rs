use serde::Serialize;
use serde_json::Number;

use media_extractor::{MediaInfo, Quality, VideoId};

/// Success body of `GET /api/video`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub direct_url: String,
    pub video_id: VideoId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VideoResponse {
    pub fn new(video_id: VideoId, direct_url: String, info: MediaInfo) -> Self {
        Self {
            success: true,
            title: info.title,
            direct_url,
            video_id,
            duration: info.duration,
            thumbnail: info.thumbnail,
            description: info.description,
        }
    }
}

/// Success body of `GET /api/video/quality`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityVideoResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_url: Option<String>,
    pub video_id: VideoId,
    pub quality: Quality,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Number>,
}

impl QualityVideoResponse {
    pub fn new(video_id: VideoId, quality: Quality, info: MediaInfo) -> Self {
        Self {
            success: true,
            title: info.title,
            direct_url: info.url,
            video_id,
            quality,
            duration: info.duration,
        }
    }
}
