//! Server dependencies (using traits for testability)
//!
//! All external tooling sits behind trait objects so tests can swap in mocks.

use std::sync::Arc;

use media_extractor::{BoundedExtractor, MediaExtractor, YtDlpExtractor};

use crate::config::Config;
use crate::kernel::credentials::CredentialFile;

/// Dependencies shared by every request handler
#[derive(Clone)]
pub struct ServerDeps {
    pub extractor: Arc<dyn MediaExtractor>,
    pub credentials: CredentialFile,
}

impl ServerDeps {
    pub fn new(extractor: Arc<dyn MediaExtractor>, credentials: CredentialFile) -> Self {
        Self {
            extractor,
            credentials,
        }
    }

    /// Production dependencies: yt-dlp with the configured timeout, capped
    /// when a concurrency limit is configured.
    pub fn from_config(config: &Config) -> Self {
        let ytdlp = YtDlpExtractor::new(&config.ytdlp_path).with_timeout(config.extraction_timeout);

        let extractor: Arc<dyn MediaExtractor> = match config.max_concurrent_extractions {
            Some(limit) => Arc::new(BoundedExtractor::new(ytdlp, limit)),
            None => Arc::new(ytdlp),
        };

        Self::new(extractor, CredentialFile::new(&config.cookies_path))
    }
}
