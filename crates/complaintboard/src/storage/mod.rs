//! Storage layer for complaintboard.
//!
//! The board lives in a single JSON document. It is read through a
//! [`ComplaintSource`] and every change is handed to a [`ComplaintSink`].
//! The default sink "downloads" the document: it drops a fresh
//! `complaints.json` into a directory and leaves it to the user to put that
//! file back wherever the source reads from.

mod document;
mod sink;
mod source;

pub use document::BoardDocument;
pub use sink::{DownloadSink, MemorySink, DOWNLOAD_FILE_NAME};
pub use source::{FileSource, HttpSource};

use tracing::debug;

use crate::config::Config;
use crate::error::Result;

/// Somewhere the board can be loaded from.
pub trait ComplaintSource {
    /// Fetch the current board document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or parsed.
    fn fetch(&self) -> Result<BoardDocument>;

    /// Short description of where the board comes from (for logging).
    fn describe(&self) -> String;
}

/// Somewhere the board is written after every change.
pub trait ComplaintSink {
    /// Hand over the full board document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn persist(&mut self, document: &BoardDocument) -> Result<()>;
}

/// Build the source described by the configuration.
///
/// A configured URL takes precedence over a file path.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn source_from_config(config: &Config) -> Result<Box<dyn ComplaintSource>> {
    if let Some(url) = &config.source.url {
        debug!("Using HTTP source {}", url);
        return Ok(Box::new(HttpSource::new(url.clone(), config.fetch_timeout())?));
    }

    let path = config.source_path();
    debug!("Using file source {}", path.display());
    Ok(Box::new(FileSource::new(path)))
}

/// Build the download sink described by the configuration.
#[must_use]
pub fn sink_from_config(config: &Config) -> DownloadSink {
    DownloadSink::new(config.output_dir())
}
