//! Core library for nb, a CLI for managing a markdown notebook.

pub mod cli;
pub mod collect;
pub mod config;
pub mod editor;
pub mod error;
pub mod frontmatter;
pub mod logs;
pub mod notebook;

use crate::cli::{Cli, CollectCommand, Command, LogCommand};
use crate::config::Config;
use clap::Parser;

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let cli = Cli::parse();

    let config = Config::resolve(cli.notebook)?;
    log::debug!("notebook root: {}", config.notebook_root().display());

    match cli.command {
        Command::Collect { target } => match target {
            CollectCommand::Link { title, url } => {
                collect::collect_link(&config, &title, url.as_deref())
            }
        },
        Command::Init => notebook::init(&config),
        Command::Log { action } => match action {
            LogCommand::Edit(args) => logs::edit(&config, &args),
            LogCommand::Rollover => logs::rollover(&config),
            LogCommand::List {
                days,
                show_unfinished,
            } => logs::list(&config, days, show_unfinished),
        },
        Command::Open => notebook::open(&config),
    }
}
