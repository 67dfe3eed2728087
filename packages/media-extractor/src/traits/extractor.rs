//! Extractor trait for resolving a page URL into playable media.
//!
//! The relay never talks to a video site itself. Everything goes through a
//! `MediaExtractor`, which in production shells out to yt-dlp and in tests is
//! a canned `MockExtractor`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use media_extractor::{ExtractOptions, MediaExtractor, Quality, YtDlpExtractor};
//!
//! let extractor = YtDlpExtractor::new("yt-dlp");
//! let options = ExtractOptions::new(Quality::P480.format_selector());
//! let info = extractor.extract("https://youtu.be/dQw4w9WgXcQ", &options).await?;
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::Result;
use crate::types::format::FormatSelector;
use crate::types::media::MediaInfo;

/// Options for a single extraction call.
///
/// Defaults mirror what the relay always wants: JSON output, certificate
/// checks off, warnings off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Format selection expression
    pub format: FormatSelector,

    /// Emit the metadata document as JSON instead of downloading
    pub dump_json: bool,

    /// Skip TLS certificate validation
    pub no_check_certificates: bool,

    /// Suppress tool warnings on stderr
    pub no_warnings: bool,

    /// Prefer free containers (WebM over MP4) when quality is equal
    pub prefer_free_formats: bool,

    /// Skip YouTube DASH manifests (progressive formats only)
    pub skip_dash_manifest: bool,

    /// Netscape cookie file handed to the tool
    pub cookies: Option<PathBuf>,
}

impl ExtractOptions {
    /// Create options selecting the given format.
    pub fn new(format: impl Into<FormatSelector>) -> Self {
        Self {
            format: format.into(),
            dump_json: true,
            no_check_certificates: true,
            no_warnings: true,
            prefer_free_formats: false,
            skip_dash_manifest: false,
            cookies: None,
        }
    }

    /// Prefer free formats.
    pub fn prefer_free_formats(mut self) -> Self {
        self.prefer_free_formats = true;
        self
    }

    /// Skip DASH manifests.
    pub fn skip_dash_manifest(mut self) -> Self {
        self.skip_dash_manifest = true;
        self
    }

    /// Pass a cookie file to the tool.
    pub fn with_cookies(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookies = Some(path.into());
        self
    }

    /// Pass a cookie file only if one was found.
    pub fn with_optional_cookies(mut self, path: Option<PathBuf>) -> Self {
        self.cookies = path;
        self
    }

    pub fn cookies(&self) -> Option<&Path> {
        self.cookies.as_deref()
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::new(FormatSelector::default())
    }
}

/// Resolves a page URL into media metadata and a direct URL.
///
/// Implementations:
/// - `YtDlpExtractor` - yt-dlp subprocess, one process per call
/// - `BoundedExtractor` - caps concurrent calls to an inner extractor
/// - `MockExtractor` - for testing
///
/// Implementations must not retry; a failure is reported once to the caller.
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Run one extraction for `url` with the given options.
    async fn extract(&self, url: &str, options: &ExtractOptions) -> Result<MediaInfo>;
}

#[async_trait]
impl<E: MediaExtractor + ?Sized> MediaExtractor for std::sync::Arc<E> {
    async fn extract(&self, url: &str, options: &ExtractOptions) -> Result<MediaInfo> {
        (**self).extract(url, options).await
    }
}
