//! Places the board can be read from.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, trace};

use super::{BoardDocument, ComplaintSource};
use crate::error::{Error, Result};

/// Reads the board from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ComplaintSource for FileSource {
    fn fetch(&self) -> Result<BoardDocument> {
        debug!("Reading board from {}", self.path.display());
        let text = std::fs::read_to_string(&self.path).map_err(|source| Error::SourceRead {
            path: self.path.clone(),
            source,
        })?;
        BoardDocument::from_json(&text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches the board from a static URL with a single blocking GET.
#[derive(Debug)]
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Create a source fetching `url`, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl ComplaintSource for HttpSource {
    fn fetch(&self) -> Result<BoardDocument> {
        debug!("Fetching board from {}", self.url);
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        trace!("Fetched {} bytes", body.len());
        BoardDocument::from_json(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
