//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::complaint::{ComplaintId, Priority, Status};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show complaints with this status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Id of the complaint
    #[arg(value_parser = parse_id)]
    pub id: ComplaintId,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Short title of the complaint
    pub title: String,

    /// What needs to be done about it
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// How urgent it is (defaults to the configured priority)
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,

    /// Who is filing it (defaults to the configured submitter)
    #[arg(short = 'b', long = "by", value_name = "NAME")]
    pub submitted_by: Option<String>,
}

/// Arguments for commands that act on a single complaint.
#[derive(Debug, Args)]
pub struct IdCommand {
    /// Id of the complaint
    #[arg(value_parser = parse_id)]
    pub id: ComplaintId,
}

fn parse_id(s: &str) -> Result<ComplaintId, String> {
    s.parse().map_err(|e: crate::error::Error| e.to_string())
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Priority argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    /// In your own time
    Low,
    /// Soon, please
    Medium,
    /// Right away
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Self::Low,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::High => Self::High,
        }
    }
}

/// Status argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Open complaints
    Open,
    /// Resolved complaints
    Resolved,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Open => Self::Open,
            StatusArg::Resolved => Self::Resolved,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_arg_conversion() {
        assert_eq!(Priority::from(PriorityArg::Low), Priority::Low);
        assert_eq!(Priority::from(PriorityArg::Medium), Priority::Medium);
        assert_eq!(Priority::from(PriorityArg::High), Priority::High);
    }

    #[test]
    fn test_status_arg_conversion() {
        assert_eq!(Status::from(StatusArg::Open), Status::Open);
        assert_eq!(Status::from(StatusArg::Resolved), Status::Resolved);
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }
}
