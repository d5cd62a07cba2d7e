//! Core complaint types for complaintboard.
//!
//! This module defines the record kept on the board and the draft a user
//! fills in before filing a new complaint.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Name recorded as the submitter when none is given.
pub const DEFAULT_SUBMITTER: &str = "Wife";

/// Identifier of a complaint.
///
/// Holds the creation time in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(pub i64);

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ComplaintId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| Error::invalid_value("id", s))
    }
}

/// How urgently a complaint needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Fix it in your own time.
    #[default]
    Low,
    /// Fix it soon.
    Medium,
    /// Fix it right away.
    High,
}

impl Priority {
    /// Human-readable label including the urgency hint.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low (in your own time)",
            Self::Medium => "Medium (soon, please)",
            Self::High => "High (right away)",
        }
    }

    /// Badge text shown next to an open complaint.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(Error::invalid_value("priority", s)),
        }
    }
}

/// Where a complaint is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Still waiting to be dealt with.
    #[default]
    Open,
    /// Dealt with.
    Resolved,
}

impl Status {
    /// The other status.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Resolved,
            Self::Resolved => Self::Open,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "resolved" => Ok(Self::Resolved),
            _ => Err(Error::invalid_value("status", s)),
        }
    }
}

fn default_submitter() -> String {
    DEFAULT_SUBMITTER.to_string()
}

/// A complaint kept on the board.
///
/// Serialized with the camelCase keys used by `complaints.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Unique identifier (creation time in epoch milliseconds).
    pub id: ComplaintId,

    /// Short summary of the complaint.
    pub title: String,

    /// What needs to be done about it.
    #[serde(default)]
    pub description: String,

    /// How urgent it is.
    #[serde(default)]
    pub priority: Priority,

    /// Who filed it.
    #[serde(default = "default_submitter")]
    pub submitted_by: String,

    /// Open or resolved.
    #[serde(default)]
    pub status: Status,

    /// Day the complaint was filed. Never changes after creation.
    pub date_submitted: NaiveDate,
}

impl Complaint {
    /// Build an open complaint from a draft.
    #[must_use]
    pub fn from_draft(id: ComplaintId, draft: ComplaintDraft, today: NaiveDate) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            submitted_by: draft.submitted_by,
            status: Status::Open,
            date_submitted: today,
        }
    }

    /// Flip between open and resolved.
    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    /// Check if the complaint is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    /// Check if the complaint has been resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status == Status::Resolved
    }
}

/// The fields a user fills in when filing a complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDraft {
    /// Short summary. Must not be blank.
    pub title: String,
    /// Optional details.
    pub description: String,
    /// Urgency.
    pub priority: Priority,
    /// Who is filing it.
    pub submitted_by: String,
}

impl Default for ComplaintDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Low,
            submitted_by: default_submitter(),
        }
    }
}

impl ComplaintDraft {
    /// Create a draft with the given title and default values elsewhere.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the submitter.
    #[must_use]
    pub fn with_submitter(mut self, submitted_by: impl Into<String>) -> Self {
        self.submitted_by = submitted_by.into();
        self
    }

    /// Check if the title has any non-whitespace content.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_priority_display_and_parse() {
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_badge() {
        assert_eq!(Priority::Low.badge(), "LOW");
        assert_eq!(Priority::High.badge(), "HIGH");
        assert!(Priority::Medium.label().starts_with("Medium"));
    }

    #[test]
    fn test_status_toggled() {
        assert_eq!(Status::Open.toggled(), Status::Resolved);
        assert_eq!(Status::Resolved.toggled(), Status::Open);
        assert_eq!(Status::default(), Status::Open);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(" resolved ".parse::<Status>().unwrap(), Status::Resolved);
        let err = "closed".parse::<Status>().unwrap_err();
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_complaint_id_parse() {
        assert_eq!("1700000000000".parse::<ComplaintId>().unwrap(), ComplaintId(1_700_000_000_000));
        assert!("abc".parse::<ComplaintId>().is_err());
    }

    #[test]
    fn test_draft_defaults() {
        let draft = ComplaintDraft::new("Dishes");
        assert_eq!(draft.priority, Priority::Low);
        assert_eq!(draft.submitted_by, "Wife");
        assert!(draft.description.is_empty());
        assert!(draft.has_title());
    }

    #[test]
    fn test_draft_blank_title() {
        assert!(!ComplaintDraft::new("").has_title());
        assert!(!ComplaintDraft::new("  \t\n").has_title());
    }

    #[test]
    fn test_from_draft_is_open() {
        let draft = ComplaintDraft::new("Fell asleep again")
            .with_description("Tell me before napping")
            .with_priority(Priority::High)
            .with_submitter("Me");
        let complaint = Complaint::from_draft(ComplaintId(42), draft, date(2024, 5, 1));

        assert_eq!(complaint.id, ComplaintId(42));
        assert!(complaint.is_open());
        assert_eq!(complaint.priority, Priority::High);
        assert_eq!(complaint.submitted_by, "Me");
        assert_eq!(complaint.date_submitted, date(2024, 5, 1));
    }

    #[test]
    fn test_toggle_status() {
        let mut complaint =
            Complaint::from_draft(ComplaintId(1), ComplaintDraft::new("x"), date(2024, 1, 1));
        complaint.toggle_status();
        assert!(complaint.is_resolved());
        complaint.toggle_status();
        assert!(complaint.is_open());
    }

    #[test]
    fn test_complaint_json_keys() {
        let complaint =
            Complaint::from_draft(ComplaintId(7), ComplaintDraft::new("Socks"), date(2024, 2, 29));
        let json = serde_json::to_value(&complaint).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["submittedBy"], "Wife");
        assert_eq!(json["status"], "open");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["dateSubmitted"], "2024-02-29");
    }

    #[test]
    fn test_complaint_deserialize_fills_defaults() {
        let json = r#"{"id": 5, "title": "Towel on bed", "dateSubmitted": "2023-12-01"}"#;
        let complaint: Complaint = serde_json::from_str(json).unwrap();

        assert_eq!(complaint.description, "");
        assert_eq!(complaint.priority, Priority::Low);
        assert_eq!(complaint.submitted_by, "Wife");
        assert_eq!(complaint.status, Status::Open);
    }
}
