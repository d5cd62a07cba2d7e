//! Command-line interface for complaintboard.
//!
//! This module provides the CLI structure for the `cboard` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, IdCommand, ListCommand, OutputFormat, PriorityArg, ShowCommand,
    StatusArg,
};

use crate::logging::Verbosity;

/// cboard - Keep track of household complaints
///
/// Every change writes a fresh complaints.json. Put that file back where the
/// board is loaded from to keep it.
#[derive(Debug, Parser)]
#[command(name = "cboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the board
    List(ListCommand),

    /// Show a single complaint
    Show(ShowCommand),

    /// File a new complaint
    Add(AddCommand),

    /// Mark a complaint resolved, or reopen it
    Toggle(IdCommand),

    /// Delete a complaint
    Delete(IdCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
