//! punchclock library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod render;
pub mod store;
pub mod ui;
pub mod utils;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Some(command) = &cli.command else {
        return print_help();
    };

    match command {
        Commands::In { .. } => cli::commands::clock_in::handle(command, cfg),
        Commands::Out { .. } => cli::commands::clock_out::handle(command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(command, cfg),
        Commands::List | Commands::Running => cli::commands::list::handle(command, cfg),
        Commands::Delete { .. } => cli::commands::delete::handle(command, cfg),
        Commands::Plot { .. } | Commands::PlotDates { .. } => {
            cli::commands::plot::handle(command, cfg)
        }
        Commands::Total { .. } => cli::commands::total::handle(command, cfg),
        Commands::Help => print_help(),
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(command, cfg),
    }
}

fn print_help() -> AppResult<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI; clap's own exit codes are replaced by ours
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(()),
                _ => Err(AppError::InvalidArgument(
                    "invalid args, enter \"punchclock help\" to show help".into(),
                )),
            };
        }
    };

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line storage override
    if let Some(root) = &cli.root {
        cfg.storage_root = root.clone();
    }

    dispatch(&cli, &cfg)
}
