//! Concurrency cap for an extractor.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::error::{ExtractorError, Result};
use crate::traits::extractor::{ExtractOptions, MediaExtractor};
use crate::types::media::MediaInfo;

/// Wraps an extractor so at most `max_concurrent` calls run at once.
///
/// Callers over the limit wait for a slot instead of failing.
///
/// ```rust,ignore
/// let extractor = BoundedExtractor::new(YtDlpExtractor::new("yt-dlp"), 8);
/// ```
pub struct BoundedExtractor<E: MediaExtractor> {
    inner: E,
    permits: Arc<Semaphore>,
    max_concurrent: usize,
}

impl<E: MediaExtractor> BoundedExtractor<E> {
    /// Create a bounded extractor. A limit of zero is raised to one.
    pub fn new(inner: E, max_concurrent: usize) -> Self {
        let max_concurrent = max_concurrent.max(1);
        Self {
            inner,
            permits: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
        }
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Slots currently free.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

#[async_trait]
impl<E: MediaExtractor> MediaExtractor for BoundedExtractor<E> {
    async fn extract(&self, url: &str, options: &ExtractOptions) -> Result<MediaInfo> {
        if self.permits.available_permits() == 0 {
            debug!(url = %url, limit = self.max_concurrent, "Waiting for extraction slot");
        }

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| ExtractorError::Unavailable)?;

        self.inner.extract(url, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::MockExtractor;
    use std::time::Duration;

    #[tokio::test]
    async fn test_never_exceeds_limit() {
        let mock = MockExtractor::new().with_delay(Duration::from_millis(50));
        let bounded = Arc::new(BoundedExtractor::new(mock.clone(), 2));

        let mut handles = Vec::new();
        for i in 0..6 {
            let bounded = bounded.clone();
            handles.push(tokio::spawn(async move {
                bounded
                    .extract(&format!("https://youtu.be/video{:06}", i), &ExtractOptions::default())
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(mock.call_count(), 6);
        assert!(mock.peak_concurrency() <= 2, "peak was {}", mock.peak_concurrency());
        assert_eq!(bounded.available(), 2);
    }

    #[tokio::test]
    async fn test_zero_limit_still_makes_progress() {
        let bounded = BoundedExtractor::new(MockExtractor::new(), 0);
        assert_eq!(bounded.max_concurrent(), 1);

        bounded
            .extract("https://youtu.be/dQw4w9WgXcQ", &ExtractOptions::default())
            .await
            .unwrap();
        assert_eq!(bounded.inner().call_count(), 1);
    }
}
