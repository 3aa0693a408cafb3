//! timeclock library root.
//! Exposes the CLI parser, the high-level run() function and the storage,
//! export and HTTP modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod server;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg),
        Commands::Employee { .. } => cli::commands::employee::handle(&cli.command, cfg),
        Commands::Clock { .. } => cli::commands::clock::handle(&cli.command, cfg),
        Commands::Records { .. } => cli::commands::records::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
