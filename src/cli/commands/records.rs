use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::db::queries::list_clock_events;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records { clear, raw } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if *clear {
            let n = ClockLogic::clear(&pool)?;
            success(format!("{} clock records deleted.", n));
            return Ok(());
        }

        if *raw {
            let events = list_clock_events(&pool.conn)?;
            if events.is_empty() {
                info("No clock records.");
                return Ok(());
            }

            let mut table = Table::new(["ID", "Employee ID", "Type", "Time"]);
            for ev in events {
                table.add_row(vec![
                    ev.id.to_string(),
                    ev.employee_id.to_string(),
                    ev.kind.to_string(),
                    ev.timestamp,
                ]);
            }
            print!("{}", table.render());
            return Ok(());
        }

        let records = ClockLogic::records(&pool)?;
        if records.is_empty() {
            info("No clock records.");
            return Ok(());
        }

        let mut table = Table::new(["Employee", "Type", "Time"]);
        for r in records {
            table.add_row(vec![r.employee_name, r.kind.to_string(), r.timestamp]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
