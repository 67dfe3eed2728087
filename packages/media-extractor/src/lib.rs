//! Media extraction through an external tool.
//!
//! Turns a video page URL into a direct, playable media URL plus metadata by
//! delegating to yt-dlp. The crate owns the seam around that tool so callers
//! can swap in a mock.
//!
//! # Usage
//!
//! ```rust,ignore
//! use media_extractor::{extract_video_id, ExtractOptions, MediaExtractor, Quality, YtDlpExtractor};
//!
//! let video_id = extract_video_id(url).ok_or(MyError::InvalidUrl)?;
//! let extractor = YtDlpExtractor::new("yt-dlp");
//! let info = extractor
//!     .extract(url, &ExtractOptions::new(Quality::P720))
//!     .await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The `MediaExtractor` trait and per-call options
//! - [`types`] - Video identifiers, quality tiers, tool output
//! - [`extractors`] - yt-dlp, bounded and mock implementations

pub mod error;
pub mod extractors;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractorError, Result};
pub use extractors::{BoundedExtractor, ExtractCall, MockExtractor, YtDlpExtractor};
pub use traits::extractor::{ExtractOptions, MediaExtractor};
pub use types::{
    format::{FormatSelector, Quality, BROWSER_COMPATIBLE_FORMAT},
    media::MediaInfo,
    video_id::{extract_video_id, VideoId, VIDEO_ID_LEN},
};
