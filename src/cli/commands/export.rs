use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&pool, *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
