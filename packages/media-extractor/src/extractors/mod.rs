//! Extractor implementations.
//!
//! # Available Extractors
//!
//! - `YtDlpExtractor` - yt-dlp subprocess
//! - `BoundedExtractor` - concurrency cap around another extractor
//! - `MockExtractor` - For testing

mod bounded;
mod mock;
mod yt_dlp;

pub use bounded::BoundedExtractor;
pub use mock::{ExtractCall, MockExtractor};
pub use yt_dlp::{YtDlpExtractor, DEFAULT_TIMEOUT};

// Re-export from traits for convenience
pub use crate::traits::extractor::{ExtractOptions, MediaExtractor};
