//! Mock extractor for testing.
//!
//! Provides a configurable mock implementation of the MediaExtractor trait.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{ExtractorError, Result};
use crate::traits::extractor::{ExtractOptions, MediaExtractor};
use crate::types::media::MediaInfo;

/// Arguments captured from an extract call
#[derive(Debug, Clone)]
pub struct ExtractCall {
    pub url: String,
    pub options: ExtractOptions,
}

#[derive(Debug, Clone)]
enum MockResponse {
    Info(MediaInfo),
    ProcessFailed(String),
    Timeout(u64),
    InvalidOutput(String),
}

/// Mock extractor for testing.
///
/// Queued responses are returned in order; once the queue is empty every call
/// gets a generic playable video.
///
/// # Example
///
/// ```rust
/// use media_extractor::{MediaInfo, MockExtractor};
///
/// let mock = MockExtractor::new()
///     .with_info(MediaInfo::new().with_title("Sample").with_url("http://example.com/media.mp4"))
///     .with_failure("ERROR: Video unavailable");
/// ```
#[derive(Default)]
pub struct MockExtractor {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<ExtractCall>>>,
    delay: Option<Duration>,
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful extraction.
    pub fn with_info(self, info: MediaInfo) -> Self {
        self.push(MockResponse::Info(info));
        self
    }

    /// Queue a tool failure (non-zero exit) with the given stderr.
    pub fn with_failure(self, stderr: impl Into<String>) -> Self {
        self.push(MockResponse::ProcessFailed(stderr.into()));
        self
    }

    /// Queue a timeout.
    pub fn with_timeout(self, seconds: u64) -> Self {
        self.push(MockResponse::Timeout(seconds));
        self
    }

    /// Queue unparseable output.
    pub fn with_invalid_output(self, reason: impl Into<String>) -> Self {
        self.push(MockResponse::InvalidOutput(reason.into()));
        self
    }

    /// Sleep this long inside every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn push(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Number of extract calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All extract calls with their arguments
    pub fn calls(&self) -> Vec<ExtractCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The most recent call, if any.
    pub fn last_call(&self) -> Option<ExtractCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Highest number of calls observed running at the same time.
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn default_info() -> MediaInfo {
        MediaInfo::new()
            .with_title("Mock Video")
            .with_url("https://media.example.com/mock.mp4")
            .with_duration(60)
    }
}

impl Clone for MockExtractor {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            calls: Arc::clone(&self.calls),
            delay: self.delay,
            in_flight: Arc::clone(&self.in_flight),
            peak: Arc::clone(&self.peak),
        }
    }
}

#[async_trait]
impl MediaExtractor for MockExtractor {
    async fn extract(&self, url: &str, options: &ExtractOptions) -> Result<MediaInfo> {
        self.calls.lock().unwrap().push(ExtractCall {
            url: url.to_string(),
            options: options.clone(),
        });

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let response = self.responses.lock().unwrap().pop_front();
        match response {
            Some(MockResponse::Info(info)) => Ok(info),
            Some(MockResponse::ProcessFailed(stderr)) => Err(ExtractorError::ProcessFailed {
                program: "yt-dlp".to_string(),
                code: Some(1),
                stderr,
            }),
            Some(MockResponse::Timeout(seconds)) => Err(ExtractorError::Timeout {
                after: Duration::from_secs(seconds),
            }),
            Some(MockResponse::InvalidOutput(reason)) => {
                Err(ExtractorError::InvalidOutput { reason })
            }
            None => Ok(Self::default_info()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_responses_are_returned_in_order() {
        let mock = MockExtractor::new()
            .with_info(MediaInfo::new().with_title("first"))
            .with_failure("ERROR: boom");

        let options = ExtractOptions::default();
        let first = mock.extract("a", &options).await.unwrap();
        assert_eq!(first.title.as_deref(), Some("first"));

        let second = mock.extract("b", &options).await.unwrap_err();
        assert!(second.to_string().contains("ERROR: boom"));

        let fallback = mock.extract("c", &options).await.unwrap();
        assert!(fallback.direct_url().is_some());

        let urls: Vec<String> = mock.calls().into_iter().map(|c| c.url).collect();
        assert_eq!(urls, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let mock = MockExtractor::new();
        let clone = mock.clone();

        clone.extract("x", &ExtractOptions::default()).await.unwrap();
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.last_call().unwrap().url, "x");
    }
}
