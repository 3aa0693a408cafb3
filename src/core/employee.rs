use crate::db::pool::DbPool;
use crate::db::queries::{create_employee, delete_employee, list_employees};
use crate::errors::AppResult;
use crate::models::{Employee, NewEmployee};
use tracing::info;

/// High-level logic for employee management.
pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn add(pool: &DbPool, emp: &NewEmployee) -> AppResult<i64> {
        let id = create_employee(&pool.conn, emp)?;
        info!(id, name = %emp.name, "employee created");
        Ok(id)
    }

    pub fn list(pool: &DbPool) -> AppResult<Vec<Employee>> {
        list_employees(&pool.conn)
    }

    /// Remove the employee together with its clock events.
    pub fn remove(pool: &mut DbPool, id: i64) -> AppResult<usize> {
        let removed_events = delete_employee(pool, id)?;
        info!(id, removed_events, "employee removed");
        Ok(removed_events)
    }
}
