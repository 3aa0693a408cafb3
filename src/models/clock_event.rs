use super::event_kind::EventKind;
use serde::Serialize;

/// A row of the `clock_events` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClockEvent {
    pub id: i64,
    pub employee_id: i64,
    pub kind: EventKind,
    pub timestamp: String, // "YYYY-MM-DD HH:MM:SS", local time
}
