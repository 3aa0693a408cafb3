use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::NewEmployee;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            EmployeeAction::Add {
                name,
                badge_number,
                role,
            } => {
                let emp = NewEmployee {
                    name: name.clone(),
                    badge_number: badge_number.clone(),
                    role: role.clone(),
                };
                let id = EmployeeLogic::add(&pool, &emp)?;
                success(format!("Employee '{}' added with id {}", name, id));
            }

            EmployeeAction::List => {
                let list = EmployeeLogic::list(&pool)?;
                if list.is_empty() {
                    info("No employees registered.");
                    return Ok(());
                }

                let mut table = Table::new(["ID", "Name", "Badge", "Role"]);
                for e in list {
                    table.add_row(vec![e.id.to_string(), e.name, e.badge_number, e.role]);
                }
                print!("{}", table.render());
            }

            EmployeeAction::Del { id } => {
                let removed = EmployeeLogic::remove(&mut pool, *id)?;
                success(format!(
                    "Employee {} deleted ({} clock records removed).",
                    id, removed
                ));
            }
        }
    }
    Ok(())
}
