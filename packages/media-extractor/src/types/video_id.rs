//! YouTube video identifiers.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Length of every YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

lazy_static! {
    // Watch URLs (any `v=` query parameter), /v/, /e/ and /embed/ paths,
    // nested channel paths, and youtu.be short links.
    static ref VIDEO_URL_REGEX: Regex = Regex::new(
        r"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([A-Za-z0-9_-]{11})"
    ).unwrap();

    static ref VIDEO_ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap();
}

/// An 11-character YouTube video identifier.
///
/// Only constructible from a string that satisfies the identifier alphabet,
/// so holding a `VideoId` means the token is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Parse a bare identifier (no URL around it).
    pub fn parse(id: &str) -> Option<Self> {
        VIDEO_ID_REGEX
            .is_match(id)
            .then(|| Self(id.to_string()))
    }

    /// Pull the identifier out of any supported YouTube URL shape.
    ///
    /// Returns `None` for anything that is not a recognised video URL.
    pub fn from_url(url: &str) -> Option<Self> {
        let captures = VIDEO_URL_REGEX.captures(url)?;
        captures.get(1).map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid video id: {}", value))
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

/// Extract the video identifier from a YouTube URL.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    VideoId::from_url(url)
}
