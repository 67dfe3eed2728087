//! Test harness wiring the router to a mock extractor.
//!
//! Each test gets its own mock and its own temp directory for the credential
//! file, so tests never share call counts or cookies.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use media_extractor::MockExtractor;
use relay_core::kernel::{CredentialFile, ServerDeps};
use relay_core::server::build_app;
use tempfile::TempDir;
use test_context::AsyncTestContext;

use super::{get_json, TestResponse};

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &mut TestHarness) {
///     let response = ctx.get("/health").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Mock extractor - inspect calls after a request, queue responses before
    pub extractor: MockExtractor,
    app: Router,
    credentials_dir: TempDir,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::with_extractor(MockExtractor::new())
    }
}

impl TestHarness {
    /// Build a harness around a pre-configured mock.
    pub fn with_extractor(extractor: MockExtractor) -> Self {
        // Initialize tracing subscriber to respect RUST_LOG environment variable.
        // Uses try_init() to avoid panicking if already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let credentials_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let deps = ServerDeps::new(
            Arc::new(extractor.clone()),
            CredentialFile::new(credentials_dir.path().join("cookies.txt")),
        );

        Self {
            extractor,
            app: build_app(deps),
            credentials_dir,
        }
    }

    /// Replace the mock (and rebuild the app around it).
    pub fn use_extractor(&mut self, extractor: MockExtractor) {
        let deps = ServerDeps::new(
            Arc::new(extractor.clone()),
            CredentialFile::new(self.cookies_path()),
        );
        self.app = build_app(deps);
        self.extractor = extractor;
    }

    /// Where the relay looks for the credential file.
    pub fn cookies_path(&self) -> PathBuf {
        self.credentials_dir.path().join("cookies.txt")
    }

    /// Put a credential file in place.
    pub fn write_cookies(&self) {
        std::fs::write(self.cookies_path(), "# Netscape HTTP Cookie File\n")
            .expect("Failed to write cookie file");
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        get_json(&self.app, uri).await
    }
}
