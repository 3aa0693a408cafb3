use crate::db::pool::DbPool;
use crate::db::queries::{clear_all_clock_events, list_clock_events_joined, record_clock_event};
use crate::errors::AppResult;
use crate::models::{ClockRecord, RecordOrder};
use tracing::{info, warn};

/// High-level logic for clock actions and the joined record listing.
pub struct ClockLogic;

impl ClockLogic {
    /// Record an entrance/exit for `employee_id` at the current local time.
    pub fn punch(pool: &DbPool, employee_id: i64, kind: &str) -> AppResult<()> {
        if let Err(e) = record_clock_event(&pool.conn, employee_id, kind) {
            warn!(employee_id, kind, error = %e, "clock event rejected");
            return Err(e);
        }
        info!(employee_id, kind, "clock event recorded");
        Ok(())
    }

    /// Joined listing for display, newest first.
    pub fn records(pool: &DbPool) -> AppResult<Vec<ClockRecord>> {
        list_clock_events_joined(&pool.conn, RecordOrder::NewestFirst)
    }

    pub fn clear(pool: &DbPool) -> AppResult<usize> {
        let n = clear_all_clock_events(&pool.conn)?;
        info!(removed = n, "clock events cleared");
        Ok(n)
    }
}
