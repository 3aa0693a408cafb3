use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { employee_id, kind } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        ClockLogic::punch(&pool, *employee_id, kind)?;
        success(format!("Recorded {} for employee {}", kind, employee_id));
    }
    Ok(())
}
