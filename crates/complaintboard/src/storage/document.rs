//! The on-disk JSON shape of the board.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::complaint::Complaint;
use crate::error::Result;

/// Contents of `complaints.json`.
///
/// ```json
/// { "complaints": [ ... ], "lastUpdated": "2024-05-01T09:30:00.000Z" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDocument {
    /// Every complaint, newest first.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub complaints: Vec<Complaint>,

    /// When the document was written, as an ISO-8601 UTC timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Complaint>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Complaint>>::deserialize(deserializer)?.unwrap_or_default())
}

impl BoardDocument {
    /// Capture the given complaints, stamped with `now`.
    #[must_use]
    pub fn snapshot(complaints: &[Complaint], now: DateTime<Utc>) -> Self {
        Self {
            complaints: complaints.to_vec(),
            last_updated: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid board document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render the document as two-space indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
