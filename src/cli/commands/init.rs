use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with both tables
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing timeclock…");

    if !cli.test {
        let path = Config::config_file();
        cfg.save_to(&path)?;
        success(format!("Config file : {}", path.display()));
    }

    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
