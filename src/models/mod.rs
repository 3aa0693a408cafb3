pub mod clock_event;
pub mod employee;
pub mod event_kind;
pub mod record;

pub use clock_event::ClockEvent;
pub use employee::{Employee, NewEmployee};
pub use event_kind::EventKind;
pub use record::{ClockRecord, RecordOrder};
