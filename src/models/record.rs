use super::event_kind::EventKind;
use serde::Serialize;

/// An employee name joined with one of its clock events.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClockRecord {
    pub employee_name: String,
    pub kind: EventKind,
    pub timestamp: String,
}

/// Ordering of joined listings by timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrder {
    /// On-screen listing.
    NewestFirst,
    /// Export.
    OldestFirst,
}

impl RecordOrder {
    pub(crate) fn to_sql(self) -> &'static str {
        match self {
            RecordOrder::NewestFirst => "ORDER BY c.timestamp DESC, c.id DESC",
            RecordOrder::OldestFirst => "ORDER BY c.timestamp ASC, c.id ASC",
        }
    }
}
