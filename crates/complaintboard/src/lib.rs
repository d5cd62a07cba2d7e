//! `complaintboard` - A household complaint board kept in one JSON file
//!
//! The board is loaded from a `complaints.json` document, changed in memory,
//! and written out again as a fresh `complaints.json` after every change.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod board;
pub mod cli;
pub mod complaint;
pub mod config;
pub mod error;
pub mod id;
pub mod logging;
pub mod render;
pub mod storage;

#[cfg(test)]
mod test_utils;

pub use board::{Board, BoardCounts};
pub use complaint::{Complaint, ComplaintDraft, ComplaintId, Priority, Status};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use storage::{BoardDocument, ComplaintSink, ComplaintSource, DownloadSink, MemorySink};
