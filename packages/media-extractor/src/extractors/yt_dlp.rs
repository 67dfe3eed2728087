//! yt-dlp subprocess extractor.
//!
//! Spawns one yt-dlp process per call, reads the `--dump-json` document from
//! stdout and parses it into `MediaInfo`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{ExtractorError, Result};
use crate::traits::extractor::{ExtractOptions, MediaExtractor};
use crate::types::media::MediaInfo;

/// Default bound on a single extraction.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Replacement for the cookie path in anything shown to callers.
const REDACTED_CREDENTIALS: &str = "[credentials]";

/// Extractor backed by the yt-dlp executable.
///
/// # Example
///
/// ```rust,ignore
/// use media_extractor::{ExtractOptions, MediaExtractor, YtDlpExtractor};
///
/// let extractor = YtDlpExtractor::new("yt-dlp").with_timeout(Duration::from_secs(20));
/// let info = extractor.extract(url, &ExtractOptions::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct YtDlpExtractor {
    program: PathBuf,
    timeout: Duration,
}

impl Default for YtDlpExtractor {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

impl YtDlpExtractor {
    /// Create an extractor running `program` (a name on `PATH` or a path).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Command-line arguments for one extraction.
    ///
    /// The URL always comes after `--` so a caller-supplied string can never
    /// be read as an option.
    pub fn build_args(url: &str, options: &ExtractOptions) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();

        if options.dump_json {
            args.push("--dump-json".into());
        }
        if options.no_check_certificates {
            args.push("--no-check-certificates".into());
        }
        if options.no_warnings {
            args.push("--no-warnings".into());
        }
        if options.prefer_free_formats {
            args.push("--prefer-free-formats".into());
        }
        if options.skip_dash_manifest {
            args.push("--youtube-skip-dash-manifest".into());
        }

        args.push("--format".into());
        args.push(options.format.as_str().into());

        if let Some(cookies) = options.cookies() {
            args.push("--cookies".into());
            args.push(cookies.as_os_str().to_owned());
        }

        args.push("--".into());
        args.push(url.into());
        args
    }

    /// Executable name without its directory, for caller-visible errors.
    fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }
}

#[async_trait]
impl MediaExtractor for YtDlpExtractor {
    async fn extract(&self, url: &str, options: &ExtractOptions) -> Result<MediaInfo> {
        let args = Self::build_args(url, options);
        debug!(
            url = %url,
            format = %options.format,
            with_cookies = options.cookies().is_some(),
            "Running yt-dlp"
        );

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExtractorError::Spawn {
                program: self.program_name(),
                source,
            })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| ExtractorError::Spawn {
                program: self.program_name(),
                source,
            })?,
            Err(_) => {
                warn!(url = %url, timeout = ?self.timeout, "yt-dlp timed out");
                return Err(ExtractorError::Timeout {
                    after: self.timeout,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = redact_credentials(stderr.trim(), options.cookies());
            warn!(url = %url, status = %output.status, stderr = %stderr, "yt-dlp failed");
            return Err(ExtractorError::ProcessFailed {
                program: self.program_name(),
                code: output.status.code(),
                stderr,
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| ExtractorError::InvalidOutput {
            reason: "stdout is not valid UTF-8".to_string(),
        })?;

        // One JSON document per line; a single video yields exactly one.
        let document = stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| ExtractorError::InvalidOutput {
                reason: "empty output".to_string(),
            })?;

        let info = MediaInfo::from_json(document)?;
        debug!(
            url = %url,
            id = info.id.as_deref().unwrap_or(""),
            title = info.title.as_deref().unwrap_or(""),
            ext = info.ext.as_deref().unwrap_or(""),
            height = ?info.height,
            has_direct_url = info.direct_url().is_some(),
            "yt-dlp finished"
        );
        Ok(info)
    }
}

/// Strip the cookie file path out of tool diagnostics.
fn redact_credentials(text: &str, cookies: Option<&Path>) -> String {
    match cookies.map(|path| path.display().to_string()) {
        Some(path) if !path.is_empty() => text.replace(&path, REDACTED_CREDENTIALS),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::format::Quality;

    fn args_as_strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_best_quality_args() {
        let options = ExtractOptions::default()
            .prefer_free_formats()
            .skip_dash_manifest();
        let args = args_as_strings(YtDlpExtractor::build_args(
            "https://youtu.be/dQw4w9WgXcQ",
            &options,
        ));

        assert_eq!(
            args,
            vec![
                "--dump-json",
                "--no-check-certificates",
                "--no-warnings",
                "--prefer-free-formats",
                "--youtube-skip-dash-manifest",
                "--format",
                "best[ext=mp4]/best[ext=webm]/best",
                "--",
                "https://youtu.be/dQw4w9WgXcQ",
            ]
        );
    }

    #[test]
    fn test_quality_args_with_cookies() {
        let options = ExtractOptions::new(Quality::P144).with_cookies("/srv/relay/cookies.txt");
        let args = args_as_strings(YtDlpExtractor::build_args("u", &options));

        assert_eq!(
            args,
            vec![
                "--dump-json",
                "--no-check-certificates",
                "--no-warnings",
                "--format",
                "worst[height<=144]",
                "--cookies",
                "/srv/relay/cookies.txt",
                "--",
                "u",
            ]
        );
    }

    #[test]
    fn test_option_like_url_stays_positional() {
        let url = "--exec=touch /tmp/x;youtube.com/watch?v=dQw4w9WgXcQ";
        let args = args_as_strings(YtDlpExtractor::build_args(url, &ExtractOptions::default()));

        let separator = args.iter().position(|a| a == "--").unwrap();
        assert_eq!(args[separator + 1], url);
        assert_eq!(separator + 2, args.len());
    }

    #[test]
    fn test_redact_credentials() {
        let text = "ERROR: cookies file /srv/relay/cookies.txt is not Netscape formatted";
        let redacted = redact_credentials(text, Some(Path::new("/srv/relay/cookies.txt")));
        assert_eq!(
            redacted,
            "ERROR: cookies file [credentials] is not Netscape formatted"
        );
        assert_eq!(redact_credentials(text, None), text);
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let extractor = YtDlpExtractor::new("/nonexistent/definitely-not-yt-dlp");
        let err = extractor
            .extract("https://youtu.be/dQw4w9WgXcQ", &ExtractOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractorError::Spawn { .. }), "got {:?}", err);
        assert!(!err.to_string().contains("/nonexistent"), "leaked path: {}", err);
    }
}
