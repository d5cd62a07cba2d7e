//! `cboard` - CLI for complaintboard
//!
//! Each run loads the board, optionally changes it, and writes a fresh
//! `complaints.json` when it did.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{bail, Context};
use clap::Parser;

use complaintboard::cli::{AddCommand, Cli, Command, ConfigCommand, ListCommand, OutputFormat};
use complaintboard::render::{self, Section};
use complaintboard::storage::{self, DownloadSink};
use complaintboard::{init_logging, Board, ComplaintDraft, ComplaintId, Config, Error, Status};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
        command => {
            let mut board = load_board(&config)?;
            let mut sink = storage::sink_from_config(&config);
            handle_board(&mut board, &mut sink, &config, command)
        }
    }
}

fn load_board(config: &Config) -> anyhow::Result<Board> {
    let source = storage::source_from_config(config)?;
    let mut board = Board::new();
    board.load(source.as_ref());
    if let Some(notice) = board.notice() {
        eprintln!("{notice}");
    }
    Ok(board)
}

fn handle_board(
    board: &mut Board,
    sink: &mut DownloadSink,
    config: &Config,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::List(list_cmd) => handle_list(board, &list_cmd)?,
        Command::Show(show_cmd) => {
            let complaint = board
                .get(show_cmd.id)
                .ok_or(Error::ComplaintNotFound(show_cmd.id))?;
            if show_cmd.json {
                println!("{}", serde_json::to_string_pretty(complaint)?);
            } else {
                print!("{}", render::complaint_detail(complaint));
            }
        }
        Command::Add(add_cmd) => handle_add(board, sink, config, add_cmd)?,
        Command::Toggle(cmd) => {
            if board.toggle_status(cmd.id, sink)? {
                let status = board.get(cmd.id).map(|c| c.status);
                match status {
                    Some(Status::Resolved) => println!("Marked {} as resolved.", cmd.id),
                    _ => println!("Reopened {}.", cmd.id),
                }
            } else {
                println!("No complaint with id {}.", cmd.id);
            }
            print_saved(sink);
        }
        Command::Delete(cmd) => {
            if board.delete(cmd.id, sink)? {
                println!("Deleted {}.", cmd.id);
            } else {
                println!("No complaint with id {}.", cmd.id);
            }
            print_saved(sink);
        }
        Command::Config(_) => bail!("config commands do not use the board"),
    }
    Ok(())
}

fn handle_list(board: &Board, cmd: &ListCommand) -> anyhow::Result<()> {
    let section = Section::from(cmd.status.map(Status::from));
    match cmd.format {
        OutputFormat::Plain => print!("{}", render::board_text(board, section)),
        OutputFormat::Json => {
            let value = render::board_json(board, section);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn handle_add(
    board: &mut Board,
    sink: &mut DownloadSink,
    config: &Config,
    cmd: AddCommand,
) -> anyhow::Result<()> {
    let priority = cmd.priority.map_or(config.defaults.priority, Into::into);
    let submitted_by = cmd
        .submitted_by
        .unwrap_or_else(|| config.defaults.submitted_by.clone());
    let draft = ComplaintDraft::new(cmd.title)
        .with_description(cmd.description)
        .with_priority(priority)
        .with_submitter(submitted_by);

    match board.create(draft, sink)? {
        Some(ComplaintId(id)) => {
            println!("Filed complaint {id}.");
            print_saved(sink);
        }
        None => println!("Nothing filed: a complaint needs a title."),
    }
    Ok(())
}

fn print_saved(sink: &DownloadSink) {
    if let Some(path) = sink.written() {
        println!("Wrote {}", path.display());
    }
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Source]");
                match &config.source.url {
                    Some(url) => println!("  URL:                {url}"),
                    None => println!("  Path:               {}", config.source_path().display()),
                }
                println!("  Timeout (secs):     {}", config.source.timeout_secs);
                println!();
                println!("[Output]");
                println!("  Directory:          {}", config.output_dir().display());
                println!();
                println!("[Defaults]");
                println!("  Submitted by:       {}", config.defaults.submitted_by);
                println!("  Priority:           {}", config.defaults.priority);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
