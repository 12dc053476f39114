use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::SourceConfig;
use crate::error::LoadError;
use crate::rows::{QuestionRow, parse_rows};

/// Contract for anything that can produce raw question rows.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch every row once.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the rows cannot be retrieved or decoded.
    async fn fetch_rows(&self) -> Result<Vec<QuestionRow>, LoadError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

//
// ─── HTTP ──────────────────────────────────────────────────────────────────────
//

/// Reads rows from a spreadsheet JSON endpoint with a single GET.
#[derive(Clone)]
pub struct SheetQuestionSource {
    client: Client,
    config: SourceConfig,
}

impl SheetQuestionSource {
    /// # Errors
    ///
    /// Returns `LoadError::Http` if the HTTP client cannot be built.
    pub fn new(config: SourceConfig) -> Result<Self, LoadError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }
}

#[async_trait]
impl QuestionSource for SheetQuestionSource {
    async fn fetch_rows(&self) -> Result<Vec<QuestionRow>, LoadError> {
        debug!(url = %self.config.url, "fetching question rows");
        let response = self.client.get(self.config.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        parse_rows(&body)
    }

    fn describe(&self) -> String {
        self.config.url.to_string()
    }
}

//
// ─── IN-MEMORY ─────────────────────────────────────────────────────────────────
//

/// Serves a fixed set of rows. Backs local row files and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticQuestionSource {
    rows: Vec<QuestionRow>,
    origin: String,
}

impl StaticQuestionSource {
    #[must_use]
    pub fn new(rows: Vec<QuestionRow>) -> Self {
        Self {
            rows,
            origin: "in-memory".to_string(),
        }
    }

    /// Build from a JSON document shaped like the HTTP response.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if `body` is not a JSON array.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        Ok(Self::new(parse_rows(body)?))
    }

    /// Read a JSON rows file from disk.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read, or a decode error.
    pub fn from_path(path: &std::path::Path) -> Result<Self, LoadError> {
        let body = std::fs::read_to_string(path)?;
        let mut source = Self::from_json(&body)?;
        source.origin = path.display().to_string();
        Ok(source)
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch_rows(&self) -> Result<Vec<QuestionRow>, LoadError> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        self.origin.clone()
    }
}
