//! Defines the command-line interface for the application.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nb",
    version,
    about = "NotaBene - a CLI for managing your markdown notebook."
)]
pub struct Cli {
    /// Path to the notebook root. [default: $NOTEBOOK_PATH, then ~/Notebook]
    #[arg(short, long, global = true, value_name = "PATH")]
    pub notebook: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// File something into the notebook's collections.
    Collect {
        #[command(subcommand)]
        target: CollectCommand,
    },
    /// Create the notebook directory scaffold.
    Init,
    /// Manage daily log files.
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },
    /// Open the notebook in your editor.
    Open,
}

#[derive(Subcommand, Debug)]
pub enum CollectCommand {
    /// Save a link as a note under Collections/Links.
    Link {
        /// Title of the link. Used verbatim as the file stem.
        title: String,
        /// The URL to save.
        url: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogCommand {
    /// Open a daily log, creating it from the template if needed.
    Edit(LogDateArgs),
    /// Move unfinished TODOs from today's log into tomorrow's.
    Rollover,
    /// List recent daily logs with their TODO counts.
    List {
        /// Number of days to show.
        #[arg(short, long, value_name = "N", default_value_t = 7)]
        days: usize,
        /// Print each unchecked TODO beneath its day.
        #[arg(long)]
        show_unfinished: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct LogDateArgs {
    /// Target yesterday's log.
    #[arg(long, conflicts_with_all = ["tomorrow", "date"])]
    pub yesterday: bool,

    /// Target tomorrow's log.
    #[arg(long, conflicts_with = "date")]
    pub tomorrow: bool,

    /// Target a specific date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}
