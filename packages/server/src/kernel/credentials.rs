//! Optional credential file for the extraction tool.

use std::path::PathBuf;

/// A cookie file that may or may not be on disk.
///
/// The file is never opened here; only its existence is checked, per
/// request, so dropping a file in place takes effect without a restart.
#[derive(Debug, Clone)]
pub struct CredentialFile {
    path: PathBuf,
}

impl CredentialFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path to hand to the extractor, if a regular file exists there.
    pub async fn resolve(&self) -> Option<PathBuf> {
        match tokio::fs::metadata(&self.path).await {
            Ok(metadata) if metadata.is_file() => Some(self.path.clone()),
            _ => None,
        }
    }
}
