// Common test utilities
#![allow(dead_code)]

pub mod harness;
pub mod http;

pub use harness::*;
pub use http::*;

/// A URL the relay accepts, with its video ID
pub const VALID_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
pub const VALID_ID: &str = "dQw4w9WgXcQ";
