//! Typed errors for the media extractor library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the server can map
//! each failure onto a response without string matching.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while resolving media through an extractor.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The extraction tool could not be started or waited on
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but exited unsuccessfully
    #[error("{program} exited with {}{}", describe_exit(.code), stderr_suffix(.stderr))]
    ProcessFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The tool did not finish within the configured bound
    #[error("extraction timed out after {}", describe_duration(.after))]
    Timeout { after: Duration },

    /// The tool produced output that is not usable (empty, not UTF-8)
    #[error("invalid extractor output: {reason}")]
    InvalidOutput { reason: String },

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Extraction slots were shut down
    #[error("extractor unavailable")]
    Unavailable,
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.trim().is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

fn describe_duration(after: &Duration) -> String {
    if after.subsec_millis() == 0 {
        format!("{}s", after.as_secs())
    } else {
        format!("{}ms", after.as_millis())
    }
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
