//! Quality labels and the yt-dlp format expressions they select.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Format preference for callers that just want something a browser can play:
/// MP4 first, then WebM, then whatever is best.
pub const BROWSER_COMPATIBLE_FORMAT: &str = "best[ext=mp4]/best[ext=webm]/best";

/// Caller-facing quality tier, bounded by vertical resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "144p")]
    P144,
    #[serde(rename = "240p")]
    P240,
    #[serde(rename = "360p")]
    P360,
    #[serde(rename = "480p")]
    P480,
    #[default]
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
}

impl Quality {
    pub const ALL: [Quality; 6] = [
        Quality::P144,
        Quality::P240,
        Quality::P360,
        Quality::P480,
        Quality::P720,
        Quality::P1080,
    ];

    /// Exact label match (`"720p"`), `None` for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.label() == label)
    }

    /// Resolve an optional caller label, falling back to 720p for missing or
    /// unknown labels.
    pub fn resolve(label: Option<&str>) -> Self {
        label.and_then(Self::from_label).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quality::P144 => "144p",
            Quality::P240 => "240p",
            Quality::P360 => "360p",
            Quality::P480 => "480p",
            Quality::P720 => "720p",
            Quality::P1080 => "1080p",
        }
    }

    /// Vertical resolution ceiling in lines.
    pub fn max_height(&self) -> u32 {
        match self {
            Quality::P144 => 144,
            Quality::P240 => 240,
            Quality::P360 => 360,
            Quality::P480 => 480,
            Quality::P720 => 720,
            Quality::P1080 => 1080,
        }
    }

    /// The format expression handed to the extraction tool.
    ///
    /// The lowest tier picks the *worst* candidate under the ceiling to keep
    /// bandwidth minimal; every other tier picks the best one.
    pub fn format_selector(&self) -> FormatSelector {
        let pick = match self {
            Quality::P144 => "worst",
            _ => "best",
        };
        FormatSelector(format!("{}[height<={}]", pick, self.max_height()))
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A yt-dlp `--format` selection expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatSelector(String);

impl FormatSelector {
    /// Wrap a raw expression.
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    /// MP4, then WebM, then best available.
    pub fn browser_compatible() -> Self {
        Self::new(BROWSER_COMPATIBLE_FORMAT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FormatSelector {
    fn default() -> Self {
        Self::browser_compatible()
    }
}

impl fmt::Display for FormatSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Quality> for FormatSelector {
    fn from(quality: Quality) -> Self {
        quality.format_selector()
    }
}
