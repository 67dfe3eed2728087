// Media Relay - API Core
//
// Accepts a YouTube URL, asks yt-dlp for a direct playable media URL and
// returns it as JSON. All extraction goes through the media-extractor crate.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
