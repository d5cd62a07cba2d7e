//! Complaint identifier generation.
//!
//! Identifiers are creation timestamps in epoch milliseconds. Two complaints
//! filed within the same millisecond would collide, so the generator never
//! hands out a value at or below the last one it issued or observed.

use chrono::{DateTime, Utc};

use crate::complaint::ComplaintId;
use crate::error::{Error, Result};

/// Produces strictly increasing, time-based complaint ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Create a generator with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an id that already exists so it is never issued again.
    pub fn observe(&mut self, id: ComplaintId) {
        self.last = self.last.max(id.0);
    }

    /// Issue an id for a complaint created now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdsExhausted`] once `i64::MAX` has been issued or observed.
    pub fn next_id(&mut self) -> Result<ComplaintId> {
        self.next_at(Utc::now())
    }

    /// Issue an id for a complaint created at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdsExhausted`] once `i64::MAX` has been issued or observed.
    pub fn next_at(&mut self, now: DateTime<Utc>) -> Result<ComplaintId> {
        let candidate = now.timestamp_millis();
        self.last = if candidate > self.last {
            candidate
        } else {
            self.last
                .checked_add(1)
                .ok_or(Error::IdsExhausted(ComplaintId(self.last)))?
        };
        Ok(ComplaintId(self.last))
    }
}
