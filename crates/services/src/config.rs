use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Spreadsheet endpoint the quiz reads from unless overridden.
pub const DEFAULT_SOURCE_URL: &str =
    "https://opensheet.elk.sh/1s3YjqTPWm1GrWl3DcAwMn4NVjg8B2Uh8qBRFjPEwJk4/Sheet1";

pub const SOURCE_URL_ENV: &str = "QUIZ_SOURCE_URL";
pub const FETCH_TIMEOUT_ENV: &str = "QUIZ_FETCH_TIMEOUT_SECS";

/// Where questions come from and how long a fetch may take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    pub url: Url,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_SOURCE_URL).expect("default source url is valid"),
            timeout: None,
        }
    }
}

impl SourceConfig {
    /// Read overrides from `QUIZ_SOURCE_URL` and `QUIZ_FETCH_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = env::var(SOURCE_URL_ENV).ok().filter(|v| !v.trim().is_empty()) {
            config = config.with_url(&raw)?;
        }
        if let Some(raw) = env::var(FETCH_TIMEOUT_ENV).ok().filter(|v| !v.trim().is_empty()) {
            config = config.with_timeout_secs(&raw)?;
        }
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` or `ConfigError::UnsupportedScheme`.
    pub fn with_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.url = parse_source_url(raw)?;
        Ok(self)
    }

    /// `0` disables the timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTimeout` if `raw` is not a whole number of seconds.
    pub fn with_timeout_secs(mut self, raw: &str) -> Result<Self, ConfigError> {
        let secs: u64 = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
        self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        Ok(self)
    }
}

fn parse_source_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        raw: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}
