//! Metadata reported by the extraction tool.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// The subset of a yt-dlp `--dump-json` document the relay cares about.
///
/// Every field is optional: the tool omits or nulls fields freely depending
/// on the site and the selected format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Site-specific media identifier
    pub id: Option<String>,

    pub title: Option<String>,

    /// Direct URL of the selected format
    pub url: Option<String>,

    /// Length in seconds, kept as the tool emitted it (integer or float)
    pub duration: Option<Number>,

    pub thumbnail: Option<String>,

    pub description: Option<String>,

    /// Container extension of the selected format (e.g. "mp4")
    pub ext: Option<String>,

    /// Vertical resolution of the selected format
    pub height: Option<u32>,
}

impl MediaInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single JSON document as printed by `--dump-json`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The direct media URL, treating an empty string as absent.
    pub fn direct_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_duration(mut self, seconds: impl Into<Number>) -> Self {
        self.duration = Some(seconds.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
