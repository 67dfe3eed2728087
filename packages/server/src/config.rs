use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// yt-dlp executable, either a name on PATH or a path
    pub ytdlp_path: PathBuf,
    /// Optional Netscape cookie file handed to yt-dlp when it exists
    pub cookies_path: PathBuf,
    pub extraction_timeout: Duration,
    /// Cap on simultaneous yt-dlp processes (unbounded when unset)
    pub max_concurrent_extractions: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            ytdlp_path: PathBuf::from("yt-dlp"),
            cookies_path: PathBuf::from("cookies.txt"),
            extraction_timeout: Duration::from_secs(30),
            max_concurrent_extractions: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment in production,
    /// a map in tests). Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(port) => port.parse().context("PORT must be a valid number")?,
            None => defaults.port,
        };

        let extraction_timeout = match lookup("EXTRACTION_TIMEOUT_SECS") {
            Some(secs) => {
                let secs: u64 = secs
                    .parse()
                    .context("EXTRACTION_TIMEOUT_SECS must be a whole number of seconds")?;
                if secs == 0 {
                    bail!("EXTRACTION_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => defaults.extraction_timeout,
        };

        let max_concurrent_extractions = match lookup("MAX_CONCURRENT_EXTRACTIONS") {
            Some(limit) => {
                let limit: usize = limit
                    .parse()
                    .context("MAX_CONCURRENT_EXTRACTIONS must be a valid number")?;
                if limit == 0 {
                    bail!("MAX_CONCURRENT_EXTRACTIONS must be greater than zero");
                }
                Some(limit)
            }
            None => defaults.max_concurrent_extractions,
        };

        Ok(Self {
            port,
            ytdlp_path: lookup("YTDLP_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.ytdlp_path),
            cookies_path: lookup("COOKIES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.cookies_path),
            extraction_timeout,
            max_concurrent_extractions,
        })
    }
}
