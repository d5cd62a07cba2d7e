//! Text and JSON views of the board.

use std::fmt::Write as _;

use serde_json::{json, Value};

use crate::board::Board;
use crate::complaint::{Complaint, Status};
use crate::storage::DOWNLOAD_FILE_NAME;

const TITLE: &str = "Complaint Board";
const NO_OPEN: &str = "No open complaints! You two are doing great!";
const NO_RESOLVED: &str = "No resolved complaints yet. Get to work!";

/// Which part of the board to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Both lists.
    #[default]
    All,
    /// Only open complaints.
    Open,
    /// Only resolved complaints.
    Resolved,
}

impl From<Option<Status>> for Section {
    fn from(status: Option<Status>) -> Self {
        match status {
            None => Self::All,
            Some(Status::Open) => Self::Open,
            Some(Status::Resolved) => Self::Resolved,
        }
    }
}

/// Render the board as plain text.
#[must_use]
pub fn board_text(board: &Board, section: Section) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));

    let counts = board.counts();
    if section != Section::Resolved {
        let open: Vec<_> = board.open().collect();
        write_list(&mut out, ("Open Issues", counts.open), &open, NO_OPEN);
    }
    if section != Section::Open {
        let resolved: Vec<_> = board.resolved().collect();
        write_list(
            &mut out,
            ("Resolved Issues", counts.resolved),
            &resolved,
            NO_RESOLVED,
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Note: every change writes a fresh {DOWNLOAD_FILE_NAME}. Upload it to where the board is hosted to keep it."
    );
    out
}

fn write_list(
    out: &mut String,
    (heading, count): (&str, usize),
    complaints: &[&Complaint],
    empty: &str,
) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{heading} ({count})");
    let _ = writeln!(out, "{}", "-".repeat(heading.len() + 4));

    if complaints.is_empty() {
        let _ = writeln!(out, "  {empty}");
        return;
    }

    for complaint in complaints {
        out.push_str(&complaint_text(complaint));
    }
}

/// Render one complaint as a short block of text.
#[must_use]
pub fn complaint_text(complaint: &Complaint) -> String {
    let badge = match complaint.status {
        Status::Open => complaint.priority.badge(),
        Status::Resolved => "RESOLVED",
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "  [{}] {}  ({badge}, {})",
        complaint.id, complaint.title, complaint.date_submitted
    );
    if !complaint.description.trim().is_empty() {
        let _ = writeln!(out, "      {}", complaint.description);
    }
    out
}

/// Render one complaint with every field, one per line.
#[must_use]
pub fn complaint_detail(complaint: &Complaint) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Id:           {}", complaint.id);
    let _ = writeln!(out, "Title:        {}", complaint.title);
    let _ = writeln!(out, "Description:  {}", complaint.description);
    let _ = writeln!(out, "Priority:     {}", complaint.priority.label());
    let _ = writeln!(out, "Submitted by: {}", complaint.submitted_by);
    let _ = writeln!(out, "Status:       {}", complaint.status);
    let _ = writeln!(out, "Submitted on: {}", complaint.date_submitted);
    out
}

/// Render the board as a JSON value.
#[must_use]
pub fn board_json(board: &Board, section: Section) -> Value {
    let mut value = json!({ "notice": board.notice() });
    if section != Section::Resolved {
        value["open"] = json!(board.open().collect::<Vec<_>>());
    }
    if section != Section::Open {
        value["resolved"] = json!(board.resolved().collect::<Vec<_>>());
    }
    value
}
