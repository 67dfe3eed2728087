use thiserror::Error;

/// Failures of the video endpoints. Display strings are shown to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VideoError {
    #[error("YouTube URL is required")]
    MissingInput,

    #[error("Invalid YouTube URL")]
    UnrecognizedUrl,

    #[error("Could not extract direct video URL")]
    NoDirectUrl,

    /// `detail` is the sanitized extractor message, or `None` for the
    /// generic form.
    #[error("Failed to fetch video{}", detail_suffix(.detail))]
    ExtractionFailed { detail: Option<String> },
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(": {}", detail),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(VideoError::MissingInput.to_string(), "YouTube URL is required");
        assert_eq!(VideoError::UnrecognizedUrl.to_string(), "Invalid YouTube URL");
        assert_eq!(
            VideoError::NoDirectUrl.to_string(),
            "Could not extract direct video URL"
        );
        assert_eq!(
            VideoError::ExtractionFailed {
                detail: Some("extraction timed out after 30s".to_string())
            }
            .to_string(),
            "Failed to fetch video: extraction timed out after 30s"
        );
        assert_eq!(
            VideoError::ExtractionFailed { detail: None }.to_string(),
            "Failed to fetch video"
        );
    }
}
