//! The complaint board.
//!
//! A [`Board`] owns the ordered list of complaints (newest first) and is the
//! only thing that changes it. Every change is followed by a save through a
//! [`ComplaintSink`]; loading goes through a [`ComplaintSource`] and never
//! fails outright.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::complaint::{Complaint, ComplaintDraft, ComplaintId};
use crate::error::Result;
use crate::id::IdGenerator;
use crate::storage::{BoardDocument, ComplaintSink, ComplaintSource};

/// Notice shown when the board could not be loaded.
pub const LOAD_FAILED_NOTICE: &str = "Failed to load complaints. Using fresh board.";

/// Number of complaints in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCounts {
    /// Complaints still open.
    pub open: usize,
    /// Complaints resolved.
    pub resolved: usize,
}

/// In-memory complaint board.
#[derive(Debug, Clone)]
pub struct Board {
    complaints: Vec<Complaint>,
    loading: bool,
    notice: Option<String>,
    ids: IdGenerator,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board that has not been loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            complaints: Vec::new(),
            loading: true,
            notice: None,
            ids: IdGenerator::new(),
        }
    }

    /// Create a loaded board holding `complaints` (newest first).
    #[must_use]
    pub fn with_complaints(complaints: Vec<Complaint>) -> Self {
        let mut board = Self::new();
        board.replace(complaints);
        board.loading = false;
        board
    }

    /// Load the board from `source`, replacing whatever it held.
    ///
    /// Any failure leaves an empty board and sets [`Board::notice`].
    pub fn load(&mut self, source: &dyn ComplaintSource) {
        match source.fetch() {
            Ok(document) => {
                info!(
                    "Loaded {} complaints from {}",
                    document.complaints.len(),
                    source.describe()
                );
                self.replace(document.complaints);
                self.notice = None;
            }
            Err(e) => {
                warn!("Fetch error from {}: {}", source.describe(), e);
                self.replace(Vec::new());
                self.notice = Some(LOAD_FAILED_NOTICE.to_string());
            }
        }
        self.loading = false;
    }

    fn replace(&mut self, complaints: Vec<Complaint>) {
        self.ids = IdGenerator::new();
        for complaint in &complaints {
            self.ids.observe(complaint.id);
        }
        self.complaints = complaints;
    }

    /// File a new complaint dated today (UTC) and save.
    ///
    /// Returns `None` without saving if the draft has a blank title.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    pub fn create(
        &mut self,
        draft: ComplaintDraft,
        sink: &mut dyn ComplaintSink,
    ) -> Result<Option<ComplaintId>> {
        self.create_on(draft, Utc::now().date_naive(), sink)
    }

    /// File a new complaint dated `today` and save.
    ///
    /// # Errors
    ///
    /// Returns an error if no id is left to issue or saving fails. The board
    /// is unchanged when no id is left.
    pub fn create_on(
        &mut self,
        draft: ComplaintDraft,
        today: NaiveDate,
        sink: &mut dyn ComplaintSink,
    ) -> Result<Option<ComplaintId>> {
        if !draft.has_title() {
            debug!("Ignoring complaint with a blank title");
            return Ok(None);
        }

        let id = self.ids.next_id()?;
        self.complaints
            .insert(0, Complaint::from_draft(id, draft, today));
        info!("Filed complaint {}", id);

        self.persist(sink)?;
        Ok(Some(id))
    }

    /// Flip the status of the complaint with `id` and save.
    ///
    /// An unknown id changes nothing but still saves. Returns whether a
    /// complaint changed.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    pub fn toggle_status(&mut self, id: ComplaintId, sink: &mut dyn ComplaintSink) -> Result<bool> {
        let changed = match self.complaints.iter_mut().find(|c| c.id == id) {
            Some(complaint) => {
                complaint.toggle_status();
                info!("Complaint {} is now {}", id, complaint.status);
                true
            }
            None => {
                debug!("No complaint {} to toggle", id);
                false
            }
        };

        self.persist(sink)?;
        Ok(changed)
    }

    /// Remove the complaint with `id` and save.
    ///
    /// Returns whether a complaint was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    pub fn delete(&mut self, id: ComplaintId, sink: &mut dyn ComplaintSink) -> Result<bool> {
        let before = self.complaints.len();
        self.complaints.retain(|c| c.id != id);
        let removed = self.complaints.len() < before;
        if removed {
            info!("Deleted complaint {}", id);
        } else {
            debug!("No complaint {} to delete", id);
        }

        self.persist(sink)?;
        Ok(removed)
    }

    /// Hand the whole board, stamped with the current time, to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn persist(&self, sink: &mut dyn ComplaintSink) -> Result<()> {
        sink.persist(&self.to_document())
    }

    /// Snapshot the board as a document stamped with the current time.
    #[must_use]
    pub fn to_document(&self) -> BoardDocument {
        BoardDocument::snapshot(&self.complaints, Utc::now())
    }

    /// All complaints, newest first.
    #[must_use]
    pub fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }

    /// Open complaints, newest first.
    pub fn open(&self) -> impl Iterator<Item = &Complaint> {
        self.complaints.iter().filter(|c| c.is_open())
    }

    /// Resolved complaints, newest first.
    pub fn resolved(&self) -> impl Iterator<Item = &Complaint> {
        self.complaints.iter().filter(|c| c.is_resolved())
    }

    /// Look up a complaint.
    #[must_use]
    pub fn get(&self, id: ComplaintId) -> Option<&Complaint> {
        self.complaints.iter().find(|c| c.id == id)
    }

    /// Number of complaints in each state.
    #[must_use]
    pub fn counts(&self) -> BoardCounts {
        self.complaints
            .iter()
            .fold(BoardCounts::default(), |mut counts, c| {
                if c.is_open() {
                    counts.open += 1;
                } else {
                    counts.resolved += 1;
                }
                counts
            })
    }

    /// Number of complaints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.complaints.len()
    }

    /// Check if the board has no complaints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.complaints.is_empty()
    }

    /// Check if the board is still waiting for its first load.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Non-fatal notice from the last load, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
