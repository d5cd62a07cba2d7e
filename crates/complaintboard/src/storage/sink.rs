//! Places the board is written to after a change.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{BoardDocument, ComplaintSink};
use crate::error::{Error, Result};

/// Name of the file every save produces.
pub const DOWNLOAD_FILE_NAME: &str = "complaints.json";

/// Writes `complaints.json` into a download directory.
///
/// Each save overwrites the previous download. The file only becomes the
/// live board once the user copies it to where the source reads from.
#[derive(Debug, Clone)]
pub struct DownloadSink {
    dir: PathBuf,
    written: Option<PathBuf>,
}

impl DownloadSink {
    /// Create a sink writing into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: None,
        }
    }

    /// Path the next save will write to.
    #[must_use]
    pub fn target(&self) -> PathBuf {
        self.dir.join(DOWNLOAD_FILE_NAME)
    }

    /// Path of the last file written, if any save happened.
    #[must_use]
    pub fn written(&self) -> Option<&Path> {
        self.written.as_deref()
    }
}

impl ComplaintSink for DownloadSink {
    fn persist(&mut self, document: &BoardDocument) -> Result<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|source| Error::DirectoryCreate {
                path: self.dir.clone(),
                source,
            })?;
        }

        let path = self.target();
        let json = document.to_pretty_json()?;
        std::fs::write(&path, json).map_err(|source| Error::SinkWrite {
            path: path.clone(),
            source,
        })?;

        info!(
            "Saved {} complaints to {}",
            document.complaints.len(),
            path.display()
        );
        self.written = Some(path);
        Ok(())
    }
}

/// Keeps every saved document in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    saved: Vec<BoardDocument>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saved.len()
    }

    /// The most recent save.
    #[must_use]
    pub fn last(&self) -> Option<&BoardDocument> {
        self.saved.last()
    }
}

impl ComplaintSink for MemorySink {
    fn persist(&mut self, document: &BoardDocument) -> Result<()> {
        debug!("Keeping board with {} complaints in memory", document.complaints.len());
        self.saved.push(document.clone());
        Ok(())
    }
}
